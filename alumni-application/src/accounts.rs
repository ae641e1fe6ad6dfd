use super::*;

/// Self-registration of students and alumni.
pub fn register_member(connections: &sqlite::Connections, new_user: usecases::NewUser) -> Result<User> {
    let email = new_user.email.clone();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::register_member(conn, new_user).inspect_err(|err| {
            log::info!("Failed to register new user {email}: {err}");
        })
    })?)
}

/// Creates an administrator unless a user with the
/// same email address already exists.
pub fn ensure_admin_exists(
    connections: &sqlite::Connections,
    new_admin: usecases::NewUser,
) -> Result<Option<User>> {
    Ok(connections.exclusive()?.transaction(|conn| -> std::result::Result<_, usecases::Error> {
        use alumni_core::repositories::UserRepo as _;
        let email = new_admin.email.trim().to_lowercase();
        if conn.try_get_user_by_email(&email)?.is_some() {
            log::debug!("Administrator {email} already exists");
            return Ok(None);
        }
        let admin = usecases::create_new_user(
            conn,
            usecases::NewUser {
                role: Role::Admin,
                ..new_admin
            },
        )?;
        log::info!("Created administrator {}", admin.email);
        Ok(Some(admin))
    })?)
}

pub fn login(connections: &sqlite::Connections, credentials: &usecases::Credentials) -> Result<User> {
    let db = connections.shared()?;
    Ok(usecases::login_with_email(&db, credentials)?)
}

pub fn update_profile(
    connections: &sqlite::Connections,
    account_id: &str,
    user_id: &str,
    update: usecases::ProfileUpdate,
) -> Result<User> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::update_profile(conn, account, user_id, update)
    })
}

pub fn update_avatar(
    connections: &sqlite::Connections,
    account_id: &str,
    user_id: &str,
    avatar: String,
) -> Result<User> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::update_avatar(conn, account, user_id, avatar)
    })
}

pub fn change_password(
    connections: &sqlite::Connections,
    account_id: &str,
    user_id: &str,
    new_password: &str,
) -> Result<()> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::change_password(conn, account, user_id, new_password)
    })
}

pub fn update_admin_profile(
    connections: &sqlite::Connections,
    account_id: &str,
    admin_id: &str,
    update: usecases::AdminProfileUpdate,
) -> Result<User> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::update_admin_profile(conn, account, admin_id, update)
    })
}
