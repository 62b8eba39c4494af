use super::*;
use sea_orm::{DatabaseConnection, DbErr};

/// Seeds a Jetstar ZQN→DXB flight and an Air New Zealand CHC→MEL flight on the same day.
async fn seed_two_airlines(db: &DatabaseConnection) -> Result<(i32, i32), DbErr> {
    let jetstar = factory::flight::FlightFactory::new(db)
        .flight_number("JQ101")
        .airline("Jetstar")
        .departure_airport("ZQN")
        .arrival_airport("DXB")
        .departure_time(at(2026, 10, 18, 8))
        .build()
        .await?;
    let air_nz = factory::flight::FlightFactory::new(db)
        .flight_number("NZ123")
        .airline("Air New Zealand")
        .departure_airport("CHC")
        .arrival_airport("MEL")
        .departure_time(at(2026, 10, 18, 15))
        .build()
        .await?;

    Ok((jetstar.id, air_nz.id))
}

/// Seeds flights straddling the 10th to 12th October, returning their IDs in departure order.
async fn seed_range_edges(db: &DatabaseConnection) -> Result<Vec<i32>, DbErr> {
    let departures = [
        Utc.with_ymd_and_hms(2026, 10, 9, 23, 59, 59).unwrap(),
        at(2026, 10, 10, 0),
        Utc.with_ymd_and_hms(2026, 10, 12, 23, 59, 59).unwrap(),
        at(2026, 10, 13, 0),
    ];

    let mut ids = Vec::new();
    for departure in departures {
        let flight = factory::flight::FlightFactory::new(db)
            .departure_time(departure)
            .build()
            .await?;
        ids.push(flight.id);
    }

    Ok(ids)
}

fn ids(flights: &[crate::server::model::flight::Flight]) -> Vec<i32> {
    flights.iter().map(|f| f.id).collect()
}

/// Tests searching by airline.
///
/// Expected: Ok with only the Jetstar flight
#[tokio::test]
async fn filters_by_airline() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (jetstar, _) = seed_two_airlines(db).await?;

    let service = FlightService::new(db);
    let flights = service
        .search(&FlightSearchParams {
            airline: Some("Jetstar".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&flights), vec![jetstar]);

    Ok(())
}

/// Tests searching by departure airport.
///
/// Expected: Ok with only the flight leaving ZQN
#[tokio::test]
async fn filters_by_departure_airport() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (jetstar, _) = seed_two_airlines(db).await?;

    let service = FlightService::new(db);
    let flights = service
        .search(&FlightSearchParams {
            departure_airport: Some("ZQN".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&flights), vec![jetstar]);

    Ok(())
}

/// Tests that text criteria match partial values in any letter case.
///
/// Expected: Ok with the Air New Zealand flight for each criterion
#[tokio::test]
async fn matches_substrings_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, air_nz) = seed_two_airlines(db).await?;

    let service = FlightService::new(db);

    let flights = service
        .search(&FlightSearchParams {
            airline: Some("new ZEAL".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(ids(&flights), vec![air_nz]);

    let flights = service
        .search(&FlightSearchParams {
            arrival_airport: Some("me".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(ids(&flights), vec![air_nz]);

    Ok(())
}

/// Tests that every supplied criterion must match.
///
/// Expected: Ok with no flights when the criteria describe different flights
#[tokio::test]
async fn combines_criteria_with_and() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (jetstar, _) = seed_two_airlines(db).await?;

    let service = FlightService::new(db);

    let flights = service
        .search(&FlightSearchParams {
            airline: Some("Jetstar".to_string()),
            arrival_airport: Some("MEL".to_string()),
            ..Default::default()
        })
        .await?;
    assert!(flights.is_empty());

    let flights = service
        .search(&FlightSearchParams {
            airline: Some("jet".to_string()),
            arrival_airport: Some("DXB".to_string()),
            date: Some(day(2026, 10, 18)),
            ..Default::default()
        })
        .await?;
    assert_eq!(ids(&flights), vec![jetstar]);

    Ok(())
}

/// Tests searching with no criteria.
///
/// Expected: Ok with every flight ordered by ID
#[tokio::test]
async fn no_criteria_returns_everything() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (jetstar, air_nz) = seed_two_airlines(db).await?;

    let service = FlightService::new(db);
    let flights = service.search(&FlightSearchParams::default()).await?;

    assert_eq!(ids(&flights), vec![jetstar, air_nz]);

    Ok(())
}

/// Tests criteria that match nothing.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn unmatched_criteria_return_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_two_airlines(db).await?;

    let service = FlightService::new(db);
    let flights = service
        .search(&FlightSearchParams {
            airline: Some("Emirates".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(flights.is_empty());

    Ok(())
}

/// Tests that LIKE wildcards in a criterion are matched literally.
///
/// Expected: Ok with only the airline whose name contains `%`
#[tokio::test]
async fn wildcards_match_literally() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_two_airlines(db).await?;
    let percent = factory::flight::FlightFactory::new(db)
        .airline("100% Air")
        .build()
        .await?;

    let service = FlightService::new(db);

    let flights = service
        .search(&FlightSearchParams {
            airline: Some("%".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(ids(&flights), vec![percent.id]);

    let flights = service
        .search(&FlightSearchParams {
            airline: Some("_".to_string()),
            ..Default::default()
        })
        .await?;
    assert!(flights.is_empty());

    Ok(())
}

/// Tests filtering on a single departure date.
///
/// Expected: Ok with flights departing on that UTC calendar day only
#[tokio::test]
async fn filters_by_single_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let edges = seed_range_edges(db).await?;

    let service = FlightService::new(db);
    let flights = service
        .search(&FlightSearchParams {
            date: Some(day(2026, 10, 10)),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&flights), vec![edges[1]]);

    Ok(())
}

/// Tests that a date range includes both of its end days.
///
/// Verifies that departures at the first instant of the start day and the last second of the
/// end day are included while the neighbouring days are excluded.
///
/// Expected: Ok with the two flights inside the range
#[tokio::test]
async fn date_range_is_inclusive() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let edges = seed_range_edges(db).await?;

    let service = FlightService::new(db);
    let flights = service
        .search(&FlightSearchParams {
            start_date: Some(day(2026, 10, 10)),
            end_date: Some(day(2026, 10, 12)),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&flights), vec![edges[1], edges[2]]);

    Ok(())
}

/// Tests that a complete date range takes priority over a single date.
///
/// Expected: Ok with the range results, ignoring the single date
#[tokio::test]
async fn date_range_beats_single_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let edges = seed_range_edges(db).await?;

    let service = FlightService::new(db);
    let flights = service
        .search(&FlightSearchParams {
            date: Some(day(2026, 10, 9)),
            start_date: Some(day(2026, 10, 12)),
            end_date: Some(day(2026, 10, 13)),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&flights), vec![edges[2], edges[3]]);

    Ok(())
}

/// Tests a range with only one bound.
///
/// Expected: Ok with every flight, as a lone bound applies no date filter
#[tokio::test]
async fn lone_range_bound_is_ignored() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let edges = seed_range_edges(db).await?;

    let service = FlightService::new(db);
    let flights = service
        .search(&FlightSearchParams {
            start_date: Some(day(2026, 10, 12)),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&flights), edges);

    Ok(())
}

/// Tests a range whose start is after its end.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn inverted_range_matches_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_range_edges(db).await?;

    let service = FlightService::new(db);
    let flights = service
        .search(&FlightSearchParams {
            start_date: Some(day(2026, 10, 12)),
            end_date: Some(day(2026, 10, 10)),
            ..Default::default()
        })
        .await?;

    assert!(flights.is_empty());

    Ok(())
}

/// Tests a date range reaching the last representable day.
///
/// Expected: Ok with flights from the start day onwards
#[tokio::test]
async fn range_ending_on_max_date_has_no_upper_bound() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let edges = seed_range_edges(db).await?;

    let service = FlightService::new(db);
    let flights = service
        .search(&FlightSearchParams {
            start_date: Some(day(2026, 10, 13)),
            end_date: Some(NaiveDate::MAX),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&flights), vec![edges[3]]);

    Ok(())
}

/// Tests searching airlines spelled with uppercase non-ASCII letters.
///
/// Expected: Ok with the flight for the exact spelling and for ASCII case variations
#[tokio::test]
async fn matches_non_ascii_airline_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let etoile = factory::flight::FlightFactory::new(db)
        .airline("ÉTOILE AIR")
        .build()
        .await?;
    factory::flight::FlightFactory::new(db)
        .airline("Jetstar")
        .build()
        .await?;

    let service = FlightService::new(db);
    for needle in ["ÉTOILE", "ÉTOILE AIR", "Étoile", "Étoile air"] {
        let flights = service
            .search(&FlightSearchParams {
                airline: Some(needle.to_string()),
                ..Default::default()
            })
            .await?;

        assert_eq!(ids(&flights), vec![etoile.id], "needle {needle:?}");
    }

    Ok(())
}

/// Tests that surrounding whitespace in a search term is matched as supplied.
///
/// Expected: Ok with no match for a trailing space the airline lacks
#[tokio::test]
async fn matches_terms_without_trimming() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let air_asia = factory::flight::FlightFactory::new(db)
        .airline("AirAsia")
        .build()
        .await?;
    let air_nz = factory::flight::FlightFactory::new(db)
        .airline("Air New Zealand")
        .build()
        .await?;

    let service = FlightService::new(db);
    let flights = service
        .search(&FlightSearchParams {
            airline: Some("Air ".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&flights), vec![air_nz.id]);

    let flights = service
        .search(&FlightSearchParams {
            airline: Some("Air".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&flights), vec![air_asia.id, air_nz.id]);

    Ok(())
}
