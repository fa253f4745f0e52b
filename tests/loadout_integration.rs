//! Integration tests for pre-run loadout validation

use ahash::AHashMap;
use potion_policy::{DecisionPolicy, LoadoutValidator, PolicyError, ResourceCatalog, ResourceId};

fn ids(raw: &[u32]) -> Vec<ResourceId> {
    raw.iter().copied().map(ResourceId).collect()
}

#[test]
fn test_unknown_id_names_offender() {
    let policy = DecisionPolicy::with_defaults(ResourceCatalog::builtin());
    let err = policy.validate_loadout(&ids(&[0, 999, 0, 0])).unwrap_err();

    match err {
        PolicyError::UnknownResource { id } => assert_eq!(id, ResourceId(999)),
        other => panic!("expected UnknownResource, got {:?}", other),
    }
    assert_eq!(
        PolicyError::UnknownResource { id: ResourceId(999) }.to_string(),
        "Unknown resource id: 999"
    );
}

#[test]
fn test_validated_loadout_feeds_decisions() {
    let policy = DecisionPolicy::with_defaults(ResourceCatalog::builtin());
    let loadout = policy.validate_loadout(&ids(&[155, 0, 151])).unwrap();

    assert_eq!(loadout.resolved.len(), 2);
    assert_eq!(loadout.resolved[0].resource.heal_amount, 12);
    assert_eq!(loadout.resolved[1].slot, 2);

    let state = potion_policy::CombatState::from_json(
        r#"{
            "player_health": 3, "player_max_health": 30, "player_shield": 0,
            "current_floor": 2, "current_room": 1,
            "enemy_move_stats": { "rock": { "damage": 5 } }
        }"#,
    )
    .unwrap();
    let result = policy.decide(&state, &loadout.slots).unwrap();
    assert!(result.should_use);
    // missing 27: both heals are fully used, lower slot wins
    assert_eq!(result.slot, Some(0));
}

#[test]
fn test_duplicate_ids_limited_by_balance() {
    let catalog = ResourceCatalog::builtin();
    let validator = LoadoutValidator::new(&catalog);
    let owned = AHashMap::from_iter([(ResourceId(131), 2)]);

    assert!(validator
        .validate_with_balances(&ids(&[131, 131]), &owned)
        .is_ok());
    assert!(matches!(
        validator.validate_with_balances(&ids(&[131, 131, 131]), &owned),
        Err(PolicyError::InsufficientBalance { selected: 3, owned: 2, .. })
    ));
}

#[test]
fn test_unknown_checked_before_balance() {
    let catalog = ResourceCatalog::builtin();
    let owned = AHashMap::new();
    assert!(matches!(
        LoadoutValidator::new(&catalog).validate_with_balances(&ids(&[999]), &owned),
        Err(PolicyError::UnknownResource { .. })
    ));
}

#[test]
fn test_validated_loadout_json_shape() {
    let catalog = ResourceCatalog::builtin();
    let validated = LoadoutValidator::new(&catalog)
        .validate(&ids(&[0, 157]))
        .unwrap();
    let json = serde_json::to_value(&validated).unwrap();

    assert_eq!(json["slots"], serde_json::json!([0, 157, 0, 0]));
    assert_eq!(json["resolved"][0]["slot"], 1);
    assert_eq!(json["resolved"][0]["resource"]["name"], "Mid Armor Juice");
}
