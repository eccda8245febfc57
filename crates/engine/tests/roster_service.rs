//! Contract tests for the roster service, driven through the public API.

use std::sync::Arc;
use std::time::{Duration, Instant};

use fellowship_domain::{Character, CharacterName, DomainError, Race, Ring};
use fellowship_engine::{
    BuiltInRoster, JsonRosterSource, RosterConfig, RosterError, RosterService, SystemClock,
};

fn character(name: &str, age: u32, race: Race) -> Character {
    Character::new(CharacterName::new(name).unwrap(), age, race)
}

#[test]
fn ensure_character_initialization_works() {
    let frodo = character("Frodo", 33, Race::Hobbit);

    assert_eq!(frodo.age(), 33);
    assert_eq!(frodo.name().as_str(), "Frodo");
    assert_ne!(frodo.name().as_str(), "Frodon");
}

#[test]
fn ensure_equals_works_for_characters() {
    let jake = character("Jake", 43, Race::Hobbit);
    let same_jake = &jake;
    let jake_clone = character("Jake", 12, Race::Hobbit);

    assert_eq!(&jake, same_jake);
    assert_ne!(jake, jake_clone);
}

#[test]
fn lookup_returns_none_for_unknown_character() {
    let service = RosterService::new();
    assert!(service.fellowship_character("Heinz").is_none());
}

#[test]
fn lookup_returns_character_for_known_name() {
    let service = RosterService::new();
    assert!(service.fellowship_character("Frodo").is_some());
}

#[test]
fn frodo_and_gandalf_are_part_of_the_fellowship() {
    let service = RosterService::new();
    let names: Vec<&str> = service
        .fellowship()
        .iter()
        .map(|c| c.name().as_str())
        .collect();

    assert!(names.contains(&"Frodo"));
    assert!(names.contains(&"Gandalf"));
}

#[test]
fn one_ring_bearer_is_part_of_the_fellowship() {
    let service = RosterService::new();
    let fellowship = service.fellowship();

    let contains = service
        .ring_bearers()
        .values()
        .any(|bearer| fellowship.iter().any(|member| Arc::ptr_eq(member, bearer)));

    assert!(contains, "at least one ring bearer must be in the fellowship");
}

#[test]
fn fellowship_can_be_retrieved_many_times() {
    for _ in 0..1000 {
        let service = RosterService::new();
        assert!(!service.fellowship().is_empty());
    }
}

#[test]
fn fellowship_keeps_its_order() {
    let service = RosterService::new();
    let fellowship = service.fellowship();

    let expected = [
        "Frodo", "Sam", "Merry", "Pippin", "Gandalf", "Legolas", "Gimli", "Aragorn", "Boromir",
    ];
    assert_eq!(fellowship.len(), expected.len());
    for (position, (member, name)) in fellowship.iter().zip(expected).enumerate() {
        assert_eq!(member.name().as_str(), name, "position {}", position);
    }
}

#[test]
fn ages_are_consistent_with_race() {
    let service = RosterService::new();
    let fellowship = service.fellowship();

    assert!(!fellowship
        .iter()
        .any(|c| matches!(c.race(), Race::Hobbit | Race::Man) && c.age() >= 100));
    assert!(!fellowship
        .iter()
        .any(|c| matches!(c.race(), Race::Elf | Race::Dwarf | Race::Maia) && c.age() <= 100));
}

#[test]
fn fellows_stay_a_small_group() {
    let service = RosterService::new();
    assert!(matches!(
        service.fellowship_member(20),
        Err(DomainError::OutOfRange { index: 20, len: 9 })
    ));
}

#[test]
#[should_panic]
fn indexing_past_the_fellowship_panics() {
    let service = RosterService::new();
    let fellowship = service.fellowship();
    let _ = &fellowship[20];
}

#[test]
fn update_completes_within_three_seconds() {
    let service = RosterService::new();
    let started = Instant::now();

    service.update().unwrap();

    assert!(started.elapsed() < Duration::from_millis(3000));
}

#[test]
fn service_built_from_json_matches_built_in_roster() {
    let source = JsonRosterSource::from_data(&BuiltInRoster::new().data()).unwrap();
    let service = RosterService::with_parts(
        Arc::new(source),
        Arc::new(SystemClock::new()),
        RosterConfig::default(),
    )
    .unwrap();

    let built_in = RosterService::new();
    assert!(service
        .fellowship()
        .iter()
        .zip(built_in.fellowship())
        .all(|(a, b)| a == b));

    let frodo = service.fellowship_character("Frodo").unwrap();
    assert!(Arc::ptr_eq(frodo, service.ring_bearer(Ring::OneRing).unwrap()));
    assert!(service.update().is_ok());
}

#[test]
fn service_rejects_roster_without_member_bearer() {
    let source = JsonRosterSource::new(
        r#"{
            "fellowship": [{"name": "Sam", "age": 38, "race": "Hobbit"}],
            "ringBearers": {"Vilya": {"name": "Elrond", "age": 3000, "race": "Elf"}}
        }"#,
    );

    let result = RosterService::with_parts(
        Arc::new(source),
        Arc::new(SystemClock::new()),
        RosterConfig::default(),
    );
    assert!(matches!(result, Err(RosterError::Invariant(_))));
}

#[test]
fn service_reports_unreadable_json() {
    let result = RosterService::with_parts(
        Arc::new(JsonRosterSource::new("[")),
        Arc::new(SystemClock::new()),
        RosterConfig::default(),
    );
    assert!(matches!(result, Err(RosterError::Source(_))));
}
