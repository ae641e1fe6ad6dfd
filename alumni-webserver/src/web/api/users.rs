use super::*;

#[post("/auth/register", format = "application/json", data = "<new_user>")]
pub fn post_register(
    db: sqlite::Connections,
    new_user: JsonResult<json::NewUser>,
) -> Result<json::User> {
    let new_user = from_json::new_user(new_user?.into_inner());
    let user = flows::register_member(&db, new_user)?;
    Ok(Json(user.into()))
}

#[post("/auth/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::JwtToken> {
    let login = login?.into_inner();
    let credentials = usecases::Credentials {
        email: &login.email,
        password: &login.password,
    };
    let user = flows::login(&db, &credentials).inspect_err(|err| {
        debug!("Login with email '{}' failed: {}", login.email, err);
    })?;
    let token = jwt_state.generate_token(user.id.as_str(), &user.role.to_string())?;
    Ok(Json(json::JwtToken { token }))
}

#[post("/auth/logout")]
pub fn post_logout(auth: Auth, jwt_state: &State<jwt::JwtState>) -> Json<()> {
    for bearer in auth.bearer_tokens() {
        jwt_state.blacklist_token(bearer.to_owned());
    }
    Json(())
}

#[get("/auth/current")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = account.user(&db.shared()?)?;
    Ok(Json(user.into()))
}

#[get("/users/<id>")]
pub fn get_user(db: sqlite::Connections, id: String) -> Result<json::User> {
    let id: Id = id.parse()?;
    let user = usecases::get_member_profile(&db.shared()?, id.as_str())?;
    Ok(Json(user.into()))
}

#[put("/users/<id>", format = "application/json", data = "<update>")]
pub fn put_user(
    db: sqlite::Connections,
    account: Account,
    id: String,
    update: JsonResult<json::UpdateProfile>,
) -> Result<json::User> {
    let id: Id = id.parse()?;
    let update = from_json::profile_update(update?.into_inner());
    let user = flows::update_profile(&db, account.id(), id.as_str(), update)?;
    Ok(Json(user.into()))
}

#[put("/users/<id>/avatar", format = "application/json", data = "<avatar>", rank = 2)]
pub fn put_user_avatar(
    db: sqlite::Connections,
    account: Account,
    id: String,
    avatar: JsonResult<json::UpdateAvatar>,
) -> Result<json::User> {
    let id: Id = id.parse()?;
    let json::UpdateAvatar { avatar } = avatar?.into_inner();
    let user = flows::update_avatar(&db, account.id(), id.as_str(), avatar)?;
    Ok(Json(user.into()))
}

#[put("/users/<id>/password", format = "application/json", data = "<password>", rank = 2)]
pub fn put_user_password(
    db: sqlite::Connections,
    account: Account,
    id: String,
    password: JsonResult<json::ChangePassword>,
) -> Result<()> {
    let id: Id = id.parse()?;
    let json::ChangePassword { new_password } = password?.into_inner();
    flows::change_password(&db, account.id(), id.as_str(), &new_password)?;
    Ok(Json(()))
}

#[get("/users/admin/<id>")]
pub fn get_admin(db: sqlite::Connections, account: Account, id: String) -> Result<json::User> {
    let id: Id = id.parse()?;
    let db = db.shared()?;
    let account = account.user(&db)?;
    let admin = usecases::get_admin_profile(&db, &account, id.as_str())?;
    Ok(Json(admin.into()))
}

#[put("/users/admin/<id>", format = "application/json", data = "<update>")]
pub fn put_admin(
    db: sqlite::Connections,
    account: Account,
    id: String,
    update: JsonResult<json::UpdateAdminProfile>,
) -> Result<json::User> {
    let id: Id = id.parse()?;
    let update = from_json::admin_profile_update(update?.into_inner());
    let admin = flows::update_admin_profile(&db, account.id(), id.as_str(), update)?;
    Ok(Json(admin.into()))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn register_and_login() {
        let (client, _db) = setup();
        let res = client
            .post("/auth/register")
            .header(ContentType::JSON)
            .body(r#"{"name":"Bob","email":"bob@example.com","password":"secret1","role":"alumni","graduation_year":2019}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let user: serde_json::Value = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!("pending", user["status"]);
        assert_eq!(2019, user["graduation_year"]);
        assert!(user.get("password").is_none());

        // Registering twice fails
        let res = client
            .post("/auth/register")
            .header(ContentType::JSON)
            .body(r#"{"name":"Bob","email":"bob@example.com","password":"secret1","role":"student"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        test_json(&res);

        let res = client
            .post("/auth/login")
            .header(ContentType::JSON)
            .body(r#"{"email":"bob@example.com","password":"wrong!"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Unauthorized);

        let token = login(&client, "bob@example.com");
        let res = client
            .get("/auth/current")
            .header(bearer(&token))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let user: serde_json::Value = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!("Bob", user["name"]);
    }

    #[test]
    fn admins_cannot_register_themselves() {
        let (client, _db) = setup();
        let res = client
            .post("/auth/register")
            .header(ContentType::JSON)
            .body(r#"{"name":"Eve","email":"eve@example.com","password":"secret1","role":"admin"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }

    #[test]
    fn invalid_json_is_unprocessable() {
        let (client, _db) = setup();
        let res = client
            .post("/auth/register")
            .header(ContentType::JSON)
            .body(r#"{"name":"Bob","role":"guest"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::UnprocessableEntity);
        test_json(&res);
    }

    #[test]
    fn logout_invalidates_the_token() {
        let (client, db) = setup();
        create_user(&db, "alice@example.com", Role::Alumni);
        let token = login(&client, "alice@example.com");
        let res = client
            .post("/auth/logout")
            .header(bearer(&token))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let res = client
            .get("/auth/current")
            .header(bearer(&token))
            .dispatch();
        assert_eq!(res.status(), Status::Unauthorized);
    }

    #[test]
    fn only_members_have_public_profiles() {
        let (client, db) = setup();
        let alice = create_user(&db, "alice@example.com", Role::Alumni);
        let admin = create_user(&db, "admin@example.com", Role::Admin);
        let res = client.get(format!("/users/{}", alice.id)).dispatch();
        assert_eq!(res.status(), Status::Ok);
        let res = client.get(format!("/users/{}", admin.id)).dispatch();
        assert_eq!(res.status(), Status::Forbidden);
        let res = client.get(format!("/users/{}", Id::new())).dispatch();
        assert_eq!(res.status(), Status::NotFound);
        let res = client.get("/users/not-an-id").dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }

    #[test]
    fn update_own_profile() {
        let (client, db) = setup();
        let alice = create_user(&db, "alice@example.com", Role::Alumni);
        let bob = create_user(&db, "bob@example.com", Role::Student);
        let token = login(&client, "alice@example.com");

        let res = client
            .put(format!("/users/{}", alice.id))
            .header(ContentType::JSON)
            .header(bearer(&token))
            .body(r#"{"name":"Alice Smith","company":"ACME","skills":["rust"]}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let user = get_user(&db, &alice.id);
        assert_eq!("Alice Smith", user.name);
        assert_eq!(Some("ACME"), user.profile.company.as_deref());
        // The avatar is kept if absent
        assert_eq!(alice.avatar, user.avatar);

        // Changing the email is not allowed
        let res = client
            .put(format!("/users/{}", alice.id))
            .header(ContentType::JSON)
            .header(bearer(&token))
            .body(r#"{"name":"Alice","email":"eve@example.com"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);

        // Profiles of others are not accessible
        let res = client
            .put(format!("/users/{}", bob.id))
            .header(ContentType::JSON)
            .header(bearer(&token))
            .body(r#"{"name":"Bobby"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);

        // Anonymous updates are rejected
        let res = client
            .put(format!("/users/{}", alice.id))
            .header(ContentType::JSON)
            .body(r#"{"name":"Anonymous"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Unauthorized);
    }

    #[test]
    fn change_avatar_and_password() {
        let (client, db) = setup();
        let alice = create_user(&db, "alice@example.com", Role::Alumni);
        let token = login(&client, "alice@example.com");
        let res = client
            .put(format!("/users/{}/avatar", alice.id))
            .header(ContentType::JSON)
            .header(bearer(&token))
            .body(r#"{"avatar":"uploads/alice.png"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert_eq!("uploads/alice.png", get_user(&db, &alice.id).avatar);

        let res = client
            .put(format!("/users/{}/password", alice.id))
            .header(ContentType::JSON)
            .header(bearer(&token))
            .body(r#"{"new_password":"secret2"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let res = client
            .post("/auth/login")
            .header(ContentType::JSON)
            .body(r#"{"email":"alice@example.com","password":"secret2"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
    }

    #[test]
    fn manage_admin_profile() {
        let (client, db) = setup();
        let admin = create_user(&db, "admin@example.com", Role::Admin);
        let alice = create_user(&db, "alice@example.com", Role::Alumni);
        let admin_token = login(&client, "admin@example.com");
        let alice_token = login(&client, "alice@example.com");

        let res = client
            .get(format!("/users/admin/{}", admin.id))
            .header(bearer(&alice_token))
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);

        let res = client
            .put(format!("/users/admin/{}", admin.id))
            .header(ContentType::JSON)
            .header(bearer(&admin_token))
            .body(r#"{"name":"Root"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);

        let res = client
            .get(format!("/users/admin/{}", admin.id))
            .header(bearer(&admin_token))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let user: serde_json::Value = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!("Root", user["name"]);

        let res = client
            .get(format!("/users/admin/{}", alice.id))
            .header(bearer(&admin_token))
            .dispatch();
        assert_eq!(res.status(), Status::NotFound);
    }
}
