//! Integration tests for tree construction and the TreeBehavior capability.

use rstest::{fixture, rstest};

use entities::util::testing;
use entities::{DeciduousTree, EvergreenTree, Foliage, Tree, TreeBehavior, ValidationError};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn oak() -> Tree {
    Tree::new("oak", 5.0, 10).expect("valid oak")
}

#[rstest]
fn given_positive_height_and_age_when_new_then_succeeds(oak: Tree) {
    assert_eq!(oak.species(), "oak");
    assert_eq!(oak.height(), 5.0);
    assert_eq!(oak.age(), 10);
}

#[rstest]
#[case(0.0, 10)]
#[case(-2.0, 10)]
#[case(5.0, 0)]
#[case(0.0, 0)]
fn given_non_positive_measurement_when_new_then_fails(#[case] height: f64, #[case] age: u32) {
    let err = Tree::new("oak", height, age).unwrap_err();

    assert_eq!(err, ValidationError::TreeMeasurements { height, age });
    assert_eq!(
        err.to_string(),
        "tree height and age must be greater than zero"
    );
}

#[rstest]
fn given_deciduous_tree_when_grow_then_age_and_height_advance(oak: Tree) {
    let mut tree = DeciduousTree::from_tree(oak, 0.5).unwrap();

    tree.grow(4);

    assert_eq!(tree.tree().age(), 14);
    assert!((tree.tree().height() - 7.0).abs() < 1e-9);
}

#[rstest]
fn given_zero_years_when_grow_then_unchanged(oak: Tree) {
    let mut tree = DeciduousTree::from_tree(oak.clone(), 0.5).unwrap();
    tree.drop_leaves();

    tree.grow(0);

    assert_eq!(tree.tree(), &oak);
    assert_eq!(tree.foliage(), Foliage::Bare);
}

#[rstest]
fn given_deciduous_tree_when_drop_leaves_then_bare_until_next_season(oak: Tree) {
    let mut tree = DeciduousTree::from_tree(oak, 0.3).unwrap();
    assert_eq!(tree.foliage(), Foliage::Leafy);

    tree.drop_leaves();
    assert_eq!(tree.foliage(), Foliage::Bare);

    tree.grow(1);
    assert_eq!(tree.foliage(), Foliage::Leafy);
}

#[test]
fn given_evergreen_when_drop_leaves_then_nothing_changes() {
    let pine = Tree::new("pine", 12.0, 40).unwrap();
    let mut tree = EvergreenTree::from_tree(pine.clone(), 0.2).unwrap();

    tree.drop_leaves();

    assert_eq!(tree.tree(), &pine);
}

#[test]
fn given_negative_growth_rate_when_new_variant_then_fails() {
    let err = DeciduousTree::new("ash", 3.0, 2, -1.0).unwrap_err();
    assert_eq!(err, ValidationError::GrowthRate(-1.0));
}

#[test]
fn given_trees_behind_trait_objects_when_grow_then_each_uses_own_rate() {
    let mut forest: Vec<Box<dyn TreeBehavior>> = vec![
        Box::new(DeciduousTree::new("oak", 5.0, 10, 1.0).unwrap()),
        Box::new(EvergreenTree::new("pine", 5.0, 10, 0.0).unwrap()),
    ];

    for tree in forest.iter_mut() {
        tree.grow(2);
    }

    assert_eq!(forest[0].tree().height(), 7.0);
    assert_eq!(forest[1].tree().height(), 5.0);
    assert!(forest.iter().all(|t| t.tree().age() == 12));
}

#[test]
fn given_raw_attributes_when_new_variant_then_same_as_wrapping_tree() {
    let built = EvergreenTree::new("spruce", 8.0, 20, 0.4).unwrap();
    let wrapped = EvergreenTree::from_tree(Tree::new("spruce", 8.0, 20).unwrap(), 0.4).unwrap();

    assert_eq!(built, wrapped);
    assert_eq!(built.growth_rate_m_per_year(), 0.4);
    assert_eq!(
        DeciduousTree::new("elm", 3.0, 5, 0.25)
            .unwrap()
            .growth_rate_m_per_year(),
        0.25
    );
}

#[test]
fn given_invalid_tree_when_new_variant_then_tree_error_wins() {
    let err = DeciduousTree::new("elm", 3.0, 0, 0.25).unwrap_err();
    assert_eq!(err, ValidationError::TreeMeasurements { height: 3.0, age: 0 });
}
