use super::*;

fn list_members(db: &sqlite::Connections, role: Role) -> Result<Vec<json::User>> {
    let members = usecases::list_members(&db.shared()?, role)?;
    Ok(Json(members.into_iter().map(Into::into).collect()))
}

fn get_member(db: &sqlite::Connections, role: Role, id: &str) -> Result<json::User> {
    let id: Id = id.parse()?;
    let member = usecases::get_member(&db.shared()?, role, id.as_str())?;
    Ok(Json(member.into()))
}

fn review_member(
    db: &sqlite::Connections,
    account: &Account,
    role: Role,
    id: &str,
    status: ApprovalStatus,
) -> Result<json::User> {
    let id: Id = id.parse()?;
    let member = flows::review_member(db, account.id(), role, id.as_str(), status)?;
    Ok(Json(member.into()))
}

fn delete_member(
    db: &sqlite::Connections,
    account: &Account,
    role: Role,
    id: &str,
) -> Result<()> {
    let id: Id = id.parse()?;
    flows::delete_member(db, account.id(), role, id.as_str())?;
    Ok(Json(()))
}

#[get("/alumni")]
pub fn get_alumni(db: sqlite::Connections) -> Result<Vec<json::User>> {
    list_members(&db, Role::Alumni)
}

#[get("/alumni/<id>", rank = 2)]
pub fn get_alumnus(db: sqlite::Connections, id: String) -> Result<json::User> {
    get_member(&db, Role::Alumni, &id)
}

#[patch("/alumni/<id>/approve")]
pub fn approve_alumnus(db: sqlite::Connections, account: Account, id: String) -> Result<json::User> {
    review_member(&db, &account, Role::Alumni, &id, ApprovalStatus::Approved)
}

#[patch("/alumni/<id>/reject")]
pub fn reject_alumnus(db: sqlite::Connections, account: Account, id: String) -> Result<json::User> {
    review_member(&db, &account, Role::Alumni, &id, ApprovalStatus::Rejected)
}

#[delete("/alumni/<id>")]
pub fn delete_alumnus(db: sqlite::Connections, account: Account, id: String) -> Result<()> {
    delete_member(&db, &account, Role::Alumni, &id)
}

#[get("/students")]
pub fn get_students(db: sqlite::Connections) -> Result<Vec<json::User>> {
    list_members(&db, Role::Student)
}

#[get("/students/<id>")]
pub fn get_student(db: sqlite::Connections, id: String) -> Result<json::User> {
    get_member(&db, Role::Student, &id)
}

#[patch("/students/<id>/approve")]
pub fn approve_student(db: sqlite::Connections, account: Account, id: String) -> Result<json::User> {
    review_member(&db, &account, Role::Student, &id, ApprovalStatus::Approved)
}

#[patch("/students/<id>/reject")]
pub fn reject_student(db: sqlite::Connections, account: Account, id: String) -> Result<json::User> {
    review_member(&db, &account, Role::Student, &id, ApprovalStatus::Rejected)
}

#[delete("/students/<id>")]
pub fn delete_student(db: sqlite::Connections, account: Account, id: String) -> Result<()> {
    delete_member(&db, &account, Role::Student, &id)
}

#[get("/alumni/counts")]
pub fn get_counts(db: sqlite::Connections) -> Result<json::DashboardCounts> {
    let counts = usecases::dashboard_counts(&db.shared()?)?;
    Ok(Json(to_json::dashboard_counts(counts)))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn list_members_by_role() {
        let (client, db) = setup();
        let res = client.get("/alumni").dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert_eq!(serde_json::json!([]), json_body(res));

        create_user(&db, "alice@example.com", Role::Alumni);
        create_user(&db, "bob@example.com", Role::Student);
        create_user(&db, "carol@example.com", Role::Student);
        create_user(&db, "admin@example.com", Role::Admin);
        let alumni = json_body(client.get("/alumni").dispatch());
        assert_eq!(1, alumni.as_array().unwrap().len());
        assert_eq!("Alice", alumni[0]["name"]);
        let students = json_body(client.get("/students").dispatch());
        assert_eq!(2, students.as_array().unwrap().len());
    }

    #[test]
    fn lookups_of_the_wrong_role_are_not_found() {
        let (client, db) = setup();
        let alice = create_user(&db, "alice@example.com", Role::Alumni);
        let res = client.get(format!("/alumni/{}", alice.id)).dispatch();
        assert_eq!(res.status(), Status::Ok);
        let res = client.get(format!("/students/{}", alice.id)).dispatch();
        assert_eq!(res.status(), Status::NotFound);
        test_json(&res);
    }

    #[test]
    fn only_admins_review_members() {
        let (client, db) = setup();
        let alice = create_user(&db, "alice@example.com", Role::Alumni);
        let bob = create_user(&db, "bob@example.com", Role::Student);
        create_user(&db, "admin@example.com", Role::Admin);
        let admin_token = login(&client, "admin@example.com");
        let alice_token = login(&client, "alice@example.com");

        let res = client
            .patch(format!("/students/{}/reject", bob.id))
            .header(bearer(&alice_token))
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);

        let res = client
            .patch(format!("/students/{}/reject", bob.id))
            .header(bearer(&admin_token))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert_eq!(ApprovalStatus::Rejected, get_user(&db, &bob.id).status);

        // Rejected accounts can no longer login
        let res = client
            .post("/auth/login")
            .header(ContentType::JSON)
            .body(r#"{"email":"bob@example.com","password":"secret1"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);

        let res = client
            .patch(format!("/alumni/{}/approve", bob.id))
            .header(bearer(&admin_token))
            .dispatch();
        assert_eq!(res.status(), Status::NotFound);

        let res = client
            .delete(format!("/alumni/{}", alice.id))
            .header(bearer(&admin_token))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert!(db
            .shared()
            .unwrap()
            .try_get_user(alice.id.as_str())
            .unwrap()
            .is_none());
    }

    #[test]
    fn count_dashboard_items() {
        let (client, db) = setup();
        create_user(&db, "alice@example.com", Role::Alumni);
        create_user(&db, "bob@example.com", Role::Student);
        let token = login(&client, "alice@example.com");
        create_topic(&client, &token, "Reunion");
        let res = client.get("/alumni/counts").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let counts = json_body(res);
        assert_eq!(1, counts["alumni"]);
        assert_eq!(1, counts["students"]);
        assert_eq!(1, counts["topics"]);
        assert_eq!(0, counts["gallery_items"]);
    }
}
