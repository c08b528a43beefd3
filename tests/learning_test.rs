//! Integration tests for learning passes and knowledge persistence.

use glosa::error::Result;
use glosa::knowledge::store::{FREQUENCIES_FILE, WEIGHTS_FILE};
use glosa::prelude::*;
use tempfile::TempDir;

fn labeled_comments() -> Vec<Comment> {
    vec![
        Comment::labeled("Mi maleta llegó rota y dañada", "Equipaje", "Daño"),
        Comment::labeled("La página está muy lenta", "Website", "Lentitud"),
        Comment::labeled("La página se pega todo el tiempo", "Website", "Lentitud"),
        Comment::labeled("hola", "Otros", "General"),
    ]
}

fn assert_same_weights(left: &KnowledgeBase, right: &KnowledgeBase) {
    let left = left.learned_weights();
    let right = right.learned_weights();
    assert_eq!(
        left.keys().collect::<Vec<_>>(),
        right.keys().collect::<Vec<_>>()
    );
    for (category, profile) in left {
        let other = &right[category];
        assert!((profile.keyword - other.keyword).abs() < 1e-9, "{category}");
        assert!((profile.context - other.context).abs() < 1e-9, "{category}");
        assert!((profile.type_ - other.type_).abs() < 1e-9, "{category}");
    }
}

#[test]
fn test_learning_is_deterministic() -> Result<()> {
    let lexicon = Lexicon::builtin()?;
    let learner = WeightLearner::new(&lexicon);

    let mut first = KnowledgeBase::new();
    let mut second = KnowledgeBase::new();
    let first_report = learner.learn(&mut first, &labeled_comments());
    let second_report = learner.learn(&mut second, &labeled_comments());

    assert_eq!(first, second);
    assert_eq!(first_report.weights, second_report.weights);
    assert_eq!(first_report.rows_used, 3);

    Ok(())
}

#[test]
fn test_persisted_knowledge_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = KnowledgeStore::new(temp_dir.path().join("learning"));
    let lexicon = Lexicon::builtin()?;

    let mut knowledge = store.load();
    assert!(knowledge.is_empty());

    WeightLearner::new(&lexicon).learn_and_persist(&store, &mut knowledge, &labeled_comments())?;
    assert!(store.directory().join(WEIGHTS_FILE).exists());
    assert!(store.directory().join(FREQUENCIES_FILE).exists());

    let loaded = store.load();
    assert_eq!(loaded.synonyms(), knowledge.synonyms());
    assert_eq!(loaded.cooccurrences(), knowledge.cooccurrences());
    assert_eq!(loaded.frequencies(), knowledge.frequencies());
    assert_same_weights(&loaded, &knowledge);

    Ok(())
}

#[test]
fn test_repeated_passes_accumulate() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = KnowledgeStore::new(temp_dir.path());
    let lexicon = Lexicon::builtin()?;
    let learner = WeightLearner::new(&lexicon);

    let mut knowledge = store.load();
    learner.learn_and_persist(&store, &mut knowledge, &labeled_comments())?;
    let maleta_once = knowledge.cooccurrence("maleta", "Equipaje");
    let synonyms_once = knowledge.stats().synonym_links;
    assert_eq!(maleta_once, 1);

    // A later run starts from what the first one persisted.
    let mut reloaded = store.load();
    let report = learner.learn_and_persist(&store, &mut reloaded, &labeled_comments())?;

    assert_eq!(report.new_synonym_links, 0);
    assert_eq!(reloaded.stats().synonym_links, synonyms_once);
    assert_eq!(reloaded.cooccurrence("maleta", "Equipaje"), 2);
    assert_eq!(reloaded.frequencies()["Website"], 4);
    assert_eq!(reloaded.frequencies()["Equipaje"], 2);
    assert!(reloaded.frequencies().get("Otros").is_none());

    Ok(())
}

#[test]
fn test_learned_weights_drive_confidence() -> Result<()> {
    let lexicon = Lexicon::builtin()?;
    let mut knowledge = KnowledgeBase::new();
    WeightLearner::new(&lexicon).learn(&mut knowledge, &labeled_comments());

    let profile = knowledge.active_weights(&lexicon, "Website");
    assert_eq!(knowledge.learned_profile("Website"), Some(profile));

    let calculator = ConfidenceCalculator::new(&lexicon, &knowledge);
    let comment = Comment::labeled("La página está muy lenta", "Website", "Lentitud");
    let detail = calculator.detail(&comment).expect("known label");
    assert_eq!(detail.weights, profile);
    assert!((0.0..=1.0).contains(&detail.confidence));

    Ok(())
}
