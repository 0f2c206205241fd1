use std::sync::Arc;

use console_core_macros::Redacted;

trait Client: Send + Sync {}

struct NoDebug;
impl Client for NoDebug {}

#[derive(Redacted)]
struct Call {
    path: String,
    #[redact]
    http: Arc<dyn Client>,
}

#[derive(Redacted)]
struct Token(#[redact] String, u8);

#[derive(Redacted)]
enum Auth {
    Anonymous,
    Basic {
        user: String,
        #[redact]
        password: String,
    },
    Bearer(#[redact] String),
}

#[derive(Redacted)]
struct Marker;

#[test]
fn named_fields_hide_marked_values() {
    let call = Call {
        path: "/_search".into(),
        http: Arc::new(NoDebug),
    };
    assert_eq!(
        format!("{call:?}"),
        r#"Call { path: "/_search", http: <redacted> }"#
    );
}

#[test]
fn tuple_fields_hide_marked_values() {
    let token = Token("secret".into(), 7);
    assert_eq!(format!("{token:?}"), "Token(<redacted>, 7)");
}

#[test]
fn enum_variants_are_prefixed_and_redacted() {
    assert_eq!(format!("{:?}", Auth::Anonymous), "Auth::Anonymous");
    assert_eq!(
        format!(
            "{:?}",
            Auth::Basic {
                user: "admin".into(),
                password: "hunter2".into()
            }
        ),
        r#"Auth::Basic { user: "admin", password: <redacted> }"#
    );
    assert_eq!(
        format!("{:?}", Auth::Bearer("abc".into())),
        "Auth::Bearer(<redacted>)"
    );
}

#[test]
fn unit_struct_prints_its_name() {
    assert_eq!(format!("{Marker:?}"), "Marker");
}
