use sea_orm::prelude::Uuid;
use tower_oauth2_resource_server::claims::DefaultClaims;

/// The requesting user's id, taken from the token subject.
/// Subjects that are not UUIDs cannot match any enrollment and resolve to `None`.
pub fn requester_id(claims: &DefaultClaims) -> Option<Uuid> {
    parse_subject(claims.sub.as_deref())
}

fn parse_subject(sub: Option<&str>) -> Option<Uuid> {
    sub.and_then(|sub| Uuid::parse_str(sub).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subject() {
        let id = Uuid::new_v4();
        assert_eq!(parse_subject(Some(&id.to_string())), Some(id));
        assert_eq!(parse_subject(Some("auth0|12345")), None);
        assert_eq!(parse_subject(None), None);
    }
}
