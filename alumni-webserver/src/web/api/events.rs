use super::*;

#[get("/events")]
pub fn get_events(db: sqlite::Connections) -> Result<Vec<json::Event>> {
    let events = db.shared()?.all_events()?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

#[post("/events/add-event", format = "application/json", data = "<event>")]
pub fn post_event(
    db: sqlite::Connections,
    account: Account,
    event: JsonResult<json::NewEvent>,
) -> Result<json::Event> {
    let new_event = from_json::new_event(event?.into_inner());
    let event = flows::create_event(&db, account.id(), new_event)?;
    Ok(Json(event.into()))
}

#[delete("/events/<id>")]
pub fn delete_event(db: sqlite::Connections, account: Account, id: String) -> Result<()> {
    let id: Id = id.parse()?;
    flows::delete_event(&db, account.id(), id.as_str())?;
    Ok(Json(()))
}

#[post("/events/join", format = "application/json", data = "<join>")]
pub fn post_join(
    db: sqlite::Connections,
    account: Account,
    join: JsonResult<json::JoinEvent>,
) -> Result<json::Registration> {
    let json::JoinEvent { event_id } = join?.into_inner();
    let event_id: Id = event_id.parse()?;
    let registration = flows::join_event(&db, account.id(), event_id.as_str())?;
    Ok(Json(registration.into()))
}

#[get("/events/joined-events/<user_id>")]
pub fn get_joined_events(
    db: sqlite::Connections,
    user_id: String,
) -> Result<Vec<json::Registration>> {
    let user_id: Id = user_id.parse()?;
    let registrations = usecases::joined_events(&db.shared()?, user_id.as_str())?;
    Ok(Json(registrations.into_iter().map(Into::into).collect()))
}

#[delete("/events/leave/<event_id>")]
pub fn delete_leave(db: sqlite::Connections, account: Account, event_id: String) -> Result<()> {
    let event_id: Id = event_id.parse()?;
    flows::leave_event(&db, account.id(), event_id.as_str())?;
    Ok(Json(()))
}

#[get("/events/<event_id>/attendees", rank = 2)]
pub fn get_attendees(
    db: sqlite::Connections,
    _account: Account,
    event_id: String,
) -> Result<Vec<json::Registration>> {
    let event_id: Id = event_id.parse()?;
    let attendees = usecases::event_attendees(&db.shared()?, event_id.as_str())?;
    Ok(Json(attendees.into_iter().map(Into::into).collect()))
}
