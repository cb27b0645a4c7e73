//! Integration tests for the generation filter

use ged_reader::{GenerationFilterConfig, filter_generations, parse_gedcom};

/// Four-generation line: I1 (born 2000) <- I2/I3 <- I4/I5 <- I6/I7
const FOUR_GENERATIONS: &str = "\
0 @I1@ INDI
1 NAME Child /Line/
1 BIRT
2 DATE 2000
1 FAMC @F1@
0 @I2@ INDI
1 NAME Father /Line/
1 BIRT
2 DATE 1940
1 FAMC @F2@
1 FAMS @F1@
0 @I3@ INDI
1 NAME Mother /Line/
1 BIRT
2 DATE 1942
1 FAMS @F1@
0 @I4@ INDI
1 NAME Grandfather /Line/
1 BIRT
2 DATE 1915
1 FAMC @F3@
1 FAMS @F2@
0 @I5@ INDI
1 NAME Grandmother /Line/
1 BIRT
2 DATE 1916
1 FAMS @F2@
0 @I6@ INDI
1 NAME Great Grandfather /Line/
1 BIRT
2 DATE 1890
1 FAMS @F3@
0 @I7@ INDI
1 NAME Great Grandmother /Line/
1 BIRT
2 DATE 1891
1 FAMS @F3@
0 @F1@ FAM
1 HUSB @I2@
1 WIFE @I3@
1 CHIL @I1@
0 @F2@ FAM
1 HUSB @I4@
1 WIFE @I5@
1 CHIL @I2@
0 @F3@ FAM
1 HUSB @I6@
1 WIFE @I7@
1 CHIL @I4@
0 TRLR
";

fn config(max_generations: u32) -> GenerationFilterConfig {
    GenerationFilterConfig::new(max_generations).with_reference_year(2020)
}

#[test]
fn test_one_generation_keeps_parents_not_grandparents() {
    let tree = parse_gedcom(FOUR_GENERATIONS);
    let filtered = filter_generations(&tree, &config(1));

    let mut ids: Vec<&String> = filtered.individuals.keys().collect();
    ids.sort();
    assert_eq!(ids, ["I1", "I2", "I3"]);
    assert!(filtered.get_family("F1").is_some());
    assert!(filtered.get_family("F2").is_none());
}

#[test]
fn test_two_generations_reach_grandparents() {
    let tree = parse_gedcom(FOUR_GENERATIONS);
    let filtered = filter_generations(&tree, &config(2));

    assert!(filtered.get_individual("I4").is_some());
    assert!(filtered.get_individual("I5").is_some());
    assert!(filtered.get_individual("I6").is_none());
    assert!(filtered.get_family("F2").is_some());
    assert!(filtered.get_family("F3").is_none());
}

#[test]
fn test_zero_generations_keeps_seeds_only() {
    let tree = parse_gedcom(FOUR_GENERATIONS);
    let filtered = filter_generations(&tree, &config(0));

    let ids: Vec<&String> = filtered.individuals.keys().collect();
    assert_eq!(ids, ["I1"]);
    assert_eq!(filtered.family_count(), 0);
}

#[test]
fn test_dangling_references_are_cleared() {
    let tree = parse_gedcom(FOUR_GENERATIONS);
    let filtered = filter_generations(&tree, &config(1));

    // I2's childhood family F2 did not survive, so the reference is dropped.
    let father = filtered.get_individual("I2").unwrap();
    assert_eq!(father.famc, None);
    assert_eq!(father.fams, vec!["F1"]);
}

#[test]
fn test_roots_rederived_after_filtering() {
    let tree = parse_gedcom(FOUR_GENERATIONS);
    assert_eq!(tree.roots, vec!["I3", "I5", "I6", "I7"]);

    let filtered = filter_generations(&tree, &config(1));
    let mut roots = filtered.roots.clone();
    roots.sort();
    assert_eq!(roots, ["I2", "I3"]);
}

#[test]
fn test_spouse_kept_for_marriage_context_without_ancestors() {
    let text = "\
0 @I1@ INDI
1 BIRT
2 DATE 1995
1 FAMS @F1@
0 @I2@ INDI
1 NAME Spouse /Elder/
1 BIRT
2 DATE 1900
1 FAMC @F2@
1 FAMS @F1@
0 @I3@ INDI
1 NAME Spouse Parent /Elder/
1 FAMS @F2@
0 @F1@ FAM
1 HUSB @I1@
1 WIFE @I2@
0 @F2@ FAM
1 HUSB @I3@
1 CHIL @I2@
0 TRLR
";
    let tree = parse_gedcom(text);
    let filtered = filter_generations(&tree, &config(3));

    // I2 is included as marriage context for the seed I1, but their own
    // ancestry is not climbed.
    assert!(filtered.get_individual("I2").is_some());
    assert!(filtered.get_family("F1").is_some());
    assert!(filtered.get_individual("I3").is_none());
    assert!(filtered.get_family("F2").is_none());
}

#[test]
fn test_people_without_birth_years_are_not_seeds() {
    let text = "\
0 @I1@ INDI
1 NAME Undated /Person/
0 @I2@ INDI
1 BIRT
2 DATE about 1850
0 TRLR
";
    let tree = parse_gedcom(text);
    let filtered = filter_generations(&tree, &config(2));
    assert!(filtered.is_empty());
}

#[test]
fn test_input_tree_is_not_mutated() {
    let tree = parse_gedcom(FOUR_GENERATIONS);
    let before = tree.individual_count();
    let _ = filter_generations(&tree, &config(1));
    assert_eq!(tree.individual_count(), before);
    assert_eq!(tree.family_count(), 3);
}

#[test]
fn test_cyclic_references_terminate() {
    // A file that (incorrectly) lists a person as their own ancestor.
    let text = "\
0 @I1@ INDI
1 BIRT
2 DATE 2001
1 FAMC @F1@
1 FAMS @F1@
0 @F1@ FAM
1 HUSB @I1@
1 CHIL @I1@
0 TRLR
";
    let tree = parse_gedcom(text);
    let filtered = filter_generations(&tree, &config(5));
    assert_eq!(filtered.individual_count(), 1);
}
