use super::*;

impl_repo!(UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user(&self, id: &str) -> Result<()>;
    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    fn get_users_by_role(&self, role: Role) -> Result<Vec<User>>;
    fn count_users_by_role(&self, role: Role) -> Result<usize>;
});

impl<'a> From<&'a User> for models::NewUser<'a> {
    fn from(u: &'a User) -> Self {
        let User {
            id,
            name,
            email,
            password,
            role,
            status,
            avatar,
            profile,
            created_at,
            updated_at,
        } = u;
        let Profile {
            phone_number,
            enrollment_number,
            degree,
            branch,
            graduation_year,
            job_title,
            experience,
            company,
            social_links,
            ..
        } = profile;
        Self {
            id: id.as_str(),
            name,
            email,
            password: password.to_string(),
            role: role_into_i16(*role),
            status: approval_status_into_i16(*status),
            avatar,
            phone_number: phone_number.as_deref(),
            enrollment_number: enrollment_number.as_deref(),
            degree: degree.as_deref(),
            branch: branch.as_deref(),
            graduation_year: *graduation_year,
            job_title: job_title.as_deref(),
            experience: experience.as_deref(),
            company: company.as_deref(),
            linkedin: social_links.linkedin.as_deref(),
            website: social_links.website.as_deref(),
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

// Duplicates would violate the primary key of the detail tables.
fn unique_values(values: &[String]) -> Vec<String> {
    let mut values = values.to_vec();
    values.sort_unstable();
    values.dedup();
    values
}

fn insert_user_details(conn: &mut SqliteConnection, rowid: i64, profile: &Profile) -> Result<()> {
    let skills: Vec<_> = unique_values(&profile.skills)
        .into_iter()
        .map(|skill| models::UserSkill {
            parent_rowid: rowid,
            skill,
        })
        .collect();
    if !skills.is_empty() {
        diesel::insert_into(schema::user_skill::table)
            .values(&skills)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    let interests: Vec<_> = unique_values(&profile.areas_of_interest)
        .into_iter()
        .map(|interest| models::UserInterest {
            parent_rowid: rowid,
            interest,
        })
        .collect();
    if !interests.is_empty() {
        diesel::insert_into(schema::user_interest::table)
            .values(&interests)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn resolve_user_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::users::dsl;
    dsl::users
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    let new_user = models::NewUser::from(u);
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let rowid = resolve_user_rowid(conn, u.id.as_str())?;
    insert_user_details(conn, rowid, &u.profile)
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let rowid = resolve_user_rowid(conn, u.id.as_str())?;
    let new_user = models::NewUser::from(u);
    let count = diesel::update(dsl::users.filter(dsl::rowid.eq(rowid)))
        .set(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)?;
    diesel::delete(schema::user_skill::table.filter(schema::user_skill::parent_rowid.eq(rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(
        schema::user_interest::table.filter(schema::user_interest::parent_rowid.eq(rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    insert_user_details(conn, rowid, &u.profile)
}

fn delete_user(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::users::dsl;
    // Skills and interests are deleted by cascade
    let count = diesel::delete(dsl::users.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn load_user(conn: &mut SqliteConnection, entity: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        rowid,
        id,
        name,
        email,
        password,
        role,
        status,
        avatar,
        phone_number,
        enrollment_number,
        degree,
        branch,
        graduation_year,
        job_title,
        experience,
        company,
        linkedin,
        website,
        created_at,
        updated_at,
    } = entity;
    let skills = schema::user_skill::table
        .select(schema::user_skill::skill)
        .filter(schema::user_skill::parent_rowid.eq(rowid))
        .load::<String>(conn)
        .map_err(from_diesel_err)?;
    let areas_of_interest = schema::user_interest::table
        .select(schema::user_interest::interest)
        .filter(schema::user_interest::parent_rowid.eq(rowid))
        .load::<String>(conn)
        .map_err(from_diesel_err)?;
    Ok(User {
        id: id.into(),
        name,
        email,
        password: password.into(),
        role: load_role(role)?,
        status: load_approval_status(status)?,
        avatar,
        profile: Profile {
            phone_number,
            enrollment_number,
            degree,
            branch,
            graduation_year,
            skills,
            areas_of_interest,
            job_title,
            experience,
            company,
            social_links: SocialLinks { linkedin, website },
        },
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<User> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    load_user(conn, entity)
}

fn try_get_user_by_email(conn: &mut SqliteConnection, email: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::email.eq(email))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|entity| load_user(conn, entity))
        .transpose()
}

fn get_users_by_role(conn: &mut SqliteConnection, role: Role) -> Result<Vec<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::role.eq(role_into_i16(role)))
        .order_by(dsl::created_at.desc())
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|entity| load_user(conn, entity))
        .collect()
}

fn count_users_by_role(conn: &mut SqliteConnection, role: Role) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::rowid))
        .filter(dsl::role.eq(role_into_i16(role)))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
