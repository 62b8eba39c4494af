use super::*;

/// Tests creating a flight.
///
/// Verifies the 201 status, the `Location` header and that the envelope echoes every field
/// with the assigned ID.
///
/// Expected: 201 with the created flight
#[tokio::test]
async fn creates_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, headers, body) = send(
        app(db),
        json_request(Method::POST, "/api/flights", &new_flight_body()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Flight created successfully"));

    let id = body["data"]["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(
        headers[header::LOCATION].to_str().unwrap(),
        format!("/api/flights/{}", id)
    );
    assert_eq!(body["data"]["flightNumber"], json!("NZ123"));
    assert_eq!(body["data"]["airline"], json!("Air New Zealand"));
    assert_eq!(body["data"]["departureAirport"], json!("CHC"));
    assert_eq!(body["data"]["arrivalAirport"], json!("MEL"));
    assert_eq!(body["data"]["departureTime"], json!("2026-10-18T09:00:00Z"));
    assert_eq!(body["data"]["arrivalTime"], json!("2026-10-18T12:30:00Z"));
    assert_eq!(body["data"]["status"], json!("Scheduled"));

    // Verify the flight can be read back
    let (status, _, fetched) = send(app(db), get(&format!("/api/flights/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], body["data"]);

    Ok(())
}

/// Tests status input given in lower case and as a numeric code.
///
/// Expected: 201 with the status rendered by its symbolic name
#[tokio::test]
async fn accepts_status_names_and_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut body = new_flight_body();
    body["status"] = json!("inair");
    let (status, _, created) = send(app(db), json_request(Method::POST, "/api/flights", &body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["status"], json!("InAir"));

    body["status"] = json!(2);
    let (status, _, created) = send(app(db), json_request(Method::POST, "/api/flights", &body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["status"], json!("Cancelled"));

    Ok(())
}

/// Tests creating a flight with missing and invalid fields.
///
/// Verifies that every failing field is reported at once under its camelCase name and that
/// nothing is stored.
///
/// Expected: 400 with the validation envelope
#[tokio::test]
async fn reports_every_invalid_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let body = json!({
        "flightNumber": "ABCDEFGHIJK",
        "airline": "   ",
        "departureAirport": "CHC"
    });

    let (status, _, response) =
        send(app(db), json_request(Method::POST, "/api/flights", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], json!(false));
    assert_eq!(response["message"], json!("Validation failed"));
    assert_eq!(
        response["errors"]["flightNumber"],
        json!(["The field FlightNumber must be a string with a maximum length of 10."])
    );
    assert_eq!(
        response["errors"]["airline"],
        json!(["The Airline field is required."])
    );
    assert!(response["errors"]["arrivalAirport"].is_array());
    assert!(response["errors"]["departureTime"].is_array());
    assert!(response["errors"]["arrivalTime"].is_array());
    assert!(response["errors"]["status"].is_array());
    assert!(response["errors"].get("departureAirport").is_none());

    let (_, _, list) = send(app(db), get("/api/flights")).await;
    assert_eq!(list["totalCount"], json!(0));

    Ok(())
}

/// Tests an unknown status value.
///
/// Expected: 400 with the error reported under `body`
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut body = new_flight_body();
    body["status"] = json!("Boarding");

    let (status, _, response) =
        send(app(db), json_request(Method::POST, "/api/flights", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["errors"]["body"].is_array());

    Ok(())
}

/// Tests a body that is not valid JSON.
///
/// Expected: 400 with the error reported under `body`
#[tokio::test]
async fn rejects_malformed_json() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/flights")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"flightNumber\": "))
        .unwrap();

    let (status, _, response) = send(app(db), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], json!("Validation failed"));
    assert!(response["errors"]["body"][0].as_str().is_some());

    Ok(())
}
