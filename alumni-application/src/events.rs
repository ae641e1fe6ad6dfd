use super::*;

pub fn create_event(
    connections: &sqlite::Connections,
    account_id: &str,
    new_event: usecases::NewEvent,
) -> Result<Event> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::create_event(conn, account, new_event)
    })
}

/// Deletes the event together with all registrations.
pub fn delete_event(
    connections: &sqlite::Connections,
    account_id: &str,
    event_id: &str,
) -> Result<()> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::delete_event_with_registrations(conn, account, event_id)
    })
}

pub fn join_event(
    connections: &sqlite::Connections,
    account_id: &str,
    event_id: &str,
) -> Result<Registration> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::join_event(conn, account, event_id)
    })
}

pub fn leave_event(
    connections: &sqlite::Connections,
    account_id: &str,
    event_id: &str,
) -> Result<()> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::leave_event(conn, account, event_id)
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn new_event() -> usecases::NewEvent {
        usecases::NewEvent {
            name: "Homecoming".into(),
            date: "2025-10-01".into(),
            location: "Main hall".into(),
            description: "".into(),
            image: None,
        }
    }

    #[test]
    fn join_leave_and_delete_event() {
        let fixture = BackendFixture::new();
        let admin = fixture.create_user("admin@example.com", Role::Admin);
        let alice = fixture.create_user("alice@example.com", Role::Alumni);
        let event = flows::create_event(&fixture.db_connections, admin.id.as_str(), new_event())
            .unwrap();

        let registration =
            flows::join_event(&fixture.db_connections, alice.id.as_str(), event.id.as_str())
                .unwrap();
        assert_eq!(event.date, registration.event_date);
        assert!(matches!(
            flows::join_event(&fixture.db_connections, alice.id.as_str(), event.id.as_str()),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::AlreadyJoined
            )))
        ));
        flows::leave_event(&fixture.db_connections, alice.id.as_str(), event.id.as_str())
            .unwrap();
        flows::join_event(&fixture.db_connections, alice.id.as_str(), event.id.as_str())
            .unwrap();

        flows::delete_event(&fixture.db_connections, admin.id.as_str(), event.id.as_str())
            .unwrap();
        let db = fixture.db_connections.shared().unwrap();
        assert!(db.registrations_of_user(alice.id.as_str()).unwrap().is_empty());
        assert_eq!(0, db.count_events().unwrap());
    }

    #[test]
    fn only_admins_create_events() {
        let fixture = BackendFixture::new();
        let alice = fixture.create_user("alice@example.com", Role::Alumni);
        assert!(matches!(
            flows::create_event(&fixture.db_connections, alice.id.as_str(), new_event()),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::Forbidden
            )))
        ));
    }
}
