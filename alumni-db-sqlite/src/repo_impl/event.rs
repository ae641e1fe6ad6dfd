use super::*;

impl_repo!(EventRepo {
    fn create_event(&self, event: &Event) -> Result<()>;
    fn delete_event(&self, id: &str) -> Result<()>;
    fn get_event(&self, id: &str) -> Result<Event>;
    fn all_events(&self) -> Result<Vec<Event>>;
    fn count_events(&self) -> Result<usize>;
});

impl_repo!(RegistrationRepo {
    fn create_registration(&self, registration: &Registration) -> Result<()>;
    fn delete_registration(&self, user_id: &str, event_id: &str) -> Result<()>;
    fn delete_registrations_of_event(&self, event_id: &str) -> Result<usize>;
    fn try_get_registration(&self, user_id: &str, event_id: &str) -> Result<Option<Registration>>;
    fn registrations_of_user(&self, user_id: &str) -> Result<Vec<Registration>>;
    fn registrations_of_event(&self, event_id: &str) -> Result<Vec<Registration>>;
});

fn load_event(entity: models::EventEntity) -> Result<Event> {
    let models::EventEntity {
        rowid: _,
        id,
        name,
        date,
        location,
        description,
        status,
        image,
        created_at,
    } = entity;
    Ok(Event {
        id: id.into(),
        name,
        date: load_date(&date)?,
        location,
        description,
        status,
        image,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn create_event(conn: &mut SqliteConnection, e: &Event) -> Result<()> {
    let new_event = models::NewEvent {
        id: e.id.as_str(),
        name: &e.name,
        date: format_date(e.date),
        location: &e.location,
        description: &e.description,
        status: &e.status,
        image: &e.image,
        created_at: e.created_at.as_millis(),
    };
    diesel::insert_into(schema::event::table)
        .values(&new_event)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_event(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::event::dsl;
    let count = diesel::delete(dsl::event.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_event(conn: &mut SqliteConnection, id: &str) -> Result<Event> {
    use schema::event::dsl;
    let entity = dsl::event
        .filter(dsl::id.eq(id))
        .first::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?;
    load_event(entity)
}

fn all_events(conn: &mut SqliteConnection) -> Result<Vec<Event>> {
    use schema::event::dsl;
    // ISO 8601 dates are sorted chronologically
    dsl::event
        .order_by((dsl::date, dsl::rowid))
        .load::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_event)
        .collect()
}

fn count_events(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::event::dsl;
    Ok(dsl::event
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn load_registration(entity: models::RegistrationEntity) -> Result<Registration> {
    let models::RegistrationEntity {
        rowid: _,
        id,
        user_id,
        event_id,
        event_name,
        event_date,
        name,
        email,
        role,
        graduation_year,
        phone_number,
        joined_at,
    } = entity;
    Ok(Registration {
        id: id.into(),
        user_id: user_id.into(),
        event_id: event_id.into(),
        event_name,
        event_date: load_date(&event_date)?,
        name,
        email,
        role: load_role(role)?,
        graduation_year,
        phone_number,
        joined_at: Timestamp::from_millis(joined_at),
    })
}

fn create_registration(conn: &mut SqliteConnection, r: &Registration) -> Result<()> {
    let new_registration = models::NewRegistration {
        id: r.id.as_str(),
        user_id: r.user_id.as_str(),
        event_id: r.event_id.as_str(),
        event_name: &r.event_name,
        event_date: format_date(r.event_date),
        name: &r.name,
        email: &r.email,
        role: role_into_i16(r.role),
        graduation_year: r.graduation_year,
        phone_number: r.phone_number.as_deref(),
        joined_at: r.joined_at.as_millis(),
    };
    diesel::insert_into(schema::event_registration::table)
        .values(&new_registration)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_registration(conn: &mut SqliteConnection, user_id: &str, event_id: &str) -> Result<()> {
    use schema::event_registration::dsl;
    let count = diesel::delete(
        dsl::event_registration
            .filter(dsl::user_id.eq(user_id))
            .filter(dsl::event_id.eq(event_id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_registrations_of_event(conn: &mut SqliteConnection, event_id: &str) -> Result<usize> {
    use schema::event_registration::dsl;
    diesel::delete(dsl::event_registration.filter(dsl::event_id.eq(event_id)))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn try_get_registration(
    conn: &mut SqliteConnection,
    user_id: &str,
    event_id: &str,
) -> Result<Option<Registration>> {
    use schema::event_registration::dsl;
    dsl::event_registration
        .filter(dsl::user_id.eq(user_id))
        .filter(dsl::event_id.eq(event_id))
        .first::<models::RegistrationEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_registration)
        .transpose()
}

fn registrations_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Registration>> {
    use schema::event_registration::dsl;
    dsl::event_registration
        .filter(dsl::user_id.eq(user_id))
        .order_by((dsl::event_date, dsl::rowid))
        .load::<models::RegistrationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_registration)
        .collect()
}

fn registrations_of_event(
    conn: &mut SqliteConnection,
    event_id: &str,
) -> Result<Vec<Registration>> {
    use schema::event_registration::dsl;
    dsl::event_registration
        .filter(dsl::event_id.eq(event_id))
        .order_by((dsl::joined_at, dsl::rowid))
        .load::<models::RegistrationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_registration)
        .collect()
}
