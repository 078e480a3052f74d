use verdict_http::{Reply, Responder, StatusCode, status_for_bad, status_for_good};
use verdict_outcome::{BadOutcome, BadTag, GoodOutcome, GoodTag, Outcome};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
struct Book {
    id: u32,
    title: String,
}

fn body_json<T: serde::Serialize>(reply: &Reply<T>) -> serde_json::Value {
    let bytes = reply.to_json().unwrap().expect("reply has a body");
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn not_found_book() {
    let outcome: Outcome<Book, BadOutcome> =
        Outcome::bad(BadOutcome::with_reason(BadTag::NotFound, "book 42"));

    let reply = Responder::default().respond(outcome, GoodTag::Ok);

    assert_eq!(
        body_json(&reply),
        serde_json::json!({
            "success": false,
            "code": 404,
            "message": "book 42",
            "data": null
        })
    );
}

#[test]
fn created_book() {
    let book = Book {
        id: 7,
        title: "Dune".to_string(),
    };
    let outcome: Outcome<Book, BadOutcome> = Outcome::good(book);

    let reply = Responder::default().respond(outcome, GoodTag::Created);

    assert_eq!(reply.status(), StatusCode::CREATED);
    assert_eq!(reply.content_type(), Some("application/json"));
    assert_eq!(
        body_json(&reply),
        serde_json::json!({
            "success": true,
            "code": 201,
            "message": "Created",
            "data": { "id": 7, "title": "Dune" }
        })
    );
}

#[test]
fn every_tag_yields_a_reply_consistent_with_its_status() {
    let responder = Responder::default();

    for tag in BadTag::ALL {
        let reply: Reply<()> = responder.send_bad(&BadOutcome::new(*tag));
        let json = body_json(&reply);
        assert_eq!(json["code"], status_for_bad(*tag).as_u16());
        assert_eq!(json["success"], false);
    }

    for tag in GoodTag::ALL {
        let reply: Reply<()> = responder.send_good(&GoodOutcome::new(*tag));
        assert_eq!(reply.status(), status_for_good(*tag));
        if let Some(body) = reply.body() {
            assert!(body.success());
        } else {
            assert_eq!(*tag, GoodTag::Deleted);
        }
    }
}

#[test]
fn success_iff_status_in_2xx() {
    let responder = Responder::default();
    for code in [100_u16, 199, 200, 201, 250, 299, 300, 404, 500] {
        let reply: Reply<()> = responder.send_status(StatusCode::from_u16(code));
        if let Some(body) = reply.body() {
            assert_eq!(body.success(), (200..300).contains(&code), "code {code}");
        }
    }
}
