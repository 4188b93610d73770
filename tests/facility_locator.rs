use axum_ewaste_api::services::facility_service::haversine_km;

#[test]
fn distance_to_self_is_zero() {
    let d = haversine_km(18.5204, 73.8567, 18.5204, 73.8567);
    assert!(d.abs() < 1e-9);
}

#[test]
fn known_city_pair_distance() {
    // Pune to Bengaluru is roughly 730 km as the crow flies.
    let d = haversine_km(18.5204, 73.8567, 12.9716, 77.5946);
    assert!((700.0..760.0).contains(&d), "got {d}");
}

#[test]
fn distance_is_symmetric() {
    let a = haversine_km(18.5204, 73.8567, 22.5726, 88.4285);
    let b = haversine_km(22.5726, 88.4285, 18.5204, 73.8567);
    assert!((a - b).abs() < 1e-9);
}

#[test]
fn nearer_point_sorts_first() {
    // Probe in Pune: the Pune facility must rank before the Kolkata one.
    let probe = (18.52, 73.85);
    let pune = haversine_km(probe.0, probe.1, 18.5204, 73.8567);
    let kolkata = haversine_km(probe.0, probe.1, 22.5726, 88.4285);
    assert!(pune < kolkata);
}
