use super::{authorize_admin, prelude::*};
use crate::util::validate::Validate;
use alumni_entities::time::parse_date;

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub location: String,
    pub description: String,
    pub image: Option<String>,
}

pub fn create_event<R: EventRepo>(repo: &R, account: &User, new_event: NewEvent) -> Result<Event> {
    authorize_admin(account)?;
    let NewEvent {
        name,
        date,
        location,
        description,
        image,
    } = new_event;
    let event = Event {
        id: Id::new(),
        name: name.trim().to_owned(),
        date: parse_date(&date)?,
        location: location.trim().to_owned(),
        description,
        status: DEFAULT_EVENT_STATUS.to_owned(),
        image: image
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR.to_owned()),
        created_at: Timestamp::now(),
    };
    event.validate()?;
    repo.create_event(&event)?;
    Ok(event)
}

/// Deletes an event and all registrations for it.
///
/// Both deletions must happen within the same transaction.
pub fn delete_event_with_registrations<R>(repo: &R, account: &User, event_id: &str) -> Result<()>
where
    R: EventRepo + RegistrationRepo,
{
    authorize_admin(account)?;
    let event = repo.get_event(event_id)?;
    repo.delete_event(event.id.as_str())?;
    let count = repo.delete_registrations_of_event(event.id.as_str())?;
    log::info!("Deleted event {} with {} registration(s)", event.id, count);
    Ok(())
}

pub fn join_event<R>(repo: &R, account: &User, event_id: &str) -> Result<Registration>
where
    R: EventRepo + RegistrationRepo,
{
    let event = repo.get_event(event_id)?;
    if repo
        .try_get_registration(account.id.as_str(), event.id.as_str())?
        .is_some()
    {
        return Err(Error::AlreadyJoined);
    }
    let registration = Registration {
        id: Id::new(),
        user_id: account.id.clone(),
        event_id: event.id,
        event_name: event.name,
        event_date: event.date,
        name: account.name.clone(),
        email: account.email.clone(),
        role: account.role,
        graduation_year: account.profile.graduation_year,
        phone_number: account.profile.phone_number.clone(),
        joined_at: Timestamp::now(),
    };
    repo.create_registration(&registration)?;
    log::debug!(
        "User {} joined event {}",
        registration.user_id,
        registration.event_id
    );
    Ok(registration)
}

pub fn leave_event<R: RegistrationRepo>(repo: &R, account: &User, event_id: &str) -> Result<()> {
    if repo
        .try_get_registration(account.id.as_str(), event_id)?
        .is_none()
    {
        return Err(Error::NotJoined);
    }
    repo.delete_registration(account.id.as_str(), event_id)?;
    Ok(())
}

pub fn joined_events<R: RegistrationRepo>(repo: &R, user_id: &str) -> Result<Vec<Registration>> {
    Ok(repo.registrations_of_user(user_id)?)
}

pub fn event_attendees<R>(repo: &R, event_id: &str) -> Result<Vec<Registration>>
where
    R: EventRepo + RegistrationRepo,
{
    let event = repo.get_event(event_id)?;
    Ok(repo.registrations_of_event(event.id.as_str())?)
}
