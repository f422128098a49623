use trivia_api::domain::types::{CategoryId, QuestionId};
use trivia_api::repository::{
    CategoryReader, QuestionListQuery, QuestionReader, QuestionWriter, RepositoryError,
};

mod common;

#[test]
fn seeded_categories_are_listed_by_type() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let categories = repo.list_categories().expect("should list categories");

    let labels: Vec<&str> = categories.iter().map(|c| c.kind.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Art", "Entertainment", "Geography", "History", "Science", "Sports"]
    );
}

#[test]
fn get_category_by_id_returns_none_for_unknown_ids() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let science = repo
        .get_category_by_id(CategoryId::new(1).unwrap())
        .expect("should query category");
    assert_eq!(science.expect("science is seeded").kind.as_str(), "Science");

    let missing = repo
        .get_category_by_id(CategoryId::new(1000).unwrap())
        .expect("should query category");
    assert!(missing.is_none());
}

#[test]
fn create_question_assigns_an_id() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let created = repo
        .create_question(&common::new_question(
            "How many miles away from earth is the moon?",
            "238,900",
            1,
            5,
        ))
        .expect("should create question");

    let stored = repo
        .get_question_by_id(created.id)
        .expect("should query question")
        .expect("question should exist");
    assert_eq!(stored, created);
    assert_eq!(stored.answer.as_str(), "238,900");
}

#[test]
fn create_question_with_unknown_category_violates_foreign_key() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let err = repo
        .create_question(&common::new_question("Orphan?", "Yes", 99, 1))
        .unwrap_err();

    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    let (total, _) = repo
        .list_questions(QuestionListQuery::default())
        .expect("should list questions");
    assert_eq!(total, 0);
}

#[test]
fn list_questions_paginates_in_id_order() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let seeded = common::seed_questions(&repo);

    let (total, first) = repo
        .list_questions(QuestionListQuery::default().paginate(1, 10))
        .expect("should list first page");
    let (_, second) = repo
        .list_questions(QuestionListQuery::default().paginate(2, 10))
        .expect("should list second page");
    let (_, third) = repo
        .list_questions(QuestionListQuery::default().paginate(3, 10))
        .expect("should list third page");

    assert_eq!(total, seeded.len());
    assert_eq!(first.len(), 10);
    assert_eq!(second.len(), seeded.len() - 10);
    assert!(third.is_empty());
    assert!(first.windows(2).all(|w| w[0].id < w[1].id));
    assert!(first.last().unwrap().id < second[0].id);
}

#[test]
fn search_matches_substrings_ignoring_case() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    common::seed_questions(&repo);

    let (total, lower) = repo
        .list_questions(QuestionListQuery::default().search("soccer"))
        .expect("should search");
    let (_, upper) = repo
        .list_questions(QuestionListQuery::default().search("SOCCER"))
        .expect("should search");

    assert_eq!(total, 2);
    assert_eq!(lower, upper);
    assert!(
        lower
            .iter()
            .all(|q| q.question.to_lowercase().contains("soccer"))
    );
}

#[test]
fn search_treats_wildcards_literally() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    common::seed_questions(&repo);
    repo.create_question(&common::new_question(
        "What is 50% of 10?",
        "5",
        1,
        1,
    ))
    .expect("should create question");

    let (total, found) = repo
        .list_questions(QuestionListQuery::default().search("%"))
        .expect("should search");

    assert_eq!(total, 1);
    assert_eq!(found[0].answer.as_str(), "5");
}

#[test]
fn category_filter_and_exclusions_combine() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let seeded = common::seed_questions(&repo);

    let art = CategoryId::new(2).unwrap();
    let art_ids: Vec<QuestionId> = seeded
        .iter()
        .filter(|q| q.category == art)
        .map(|q| q.id)
        .collect();

    let (total, remaining) = repo
        .list_questions(
            QuestionListQuery::default()
                .category(art)
                .exclude(art_ids[..2].iter().copied()),
        )
        .expect("should list questions");

    assert_eq!(total, art_ids.len() - 2);
    assert!(remaining.iter().all(|q| q.category == art));
    assert!(remaining.iter().all(|q| !art_ids[..2].contains(&q.id)));
}

#[test]
fn long_exclusion_lists_are_applied() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let seeded = common::seed_questions(&repo);
    let kept: Vec<QuestionId> = vec![seeded[3].id, seeded[10].id];

    let excluded: Vec<QuestionId> = (1..=40_000)
        .map(|id| QuestionId::new(id).unwrap())
        .filter(|id| !kept.contains(id))
        .collect();

    let (total, remaining) = repo
        .list_questions(QuestionListQuery::default().exclude(excluded.clone()))
        .expect("should list questions");
    assert_eq!(total, 2);
    assert_eq!(
        remaining.iter().map(|q| q.id).collect::<Vec<_>>(),
        kept
    );

    let (total, second_page) = repo
        .list_questions(
            QuestionListQuery::default()
                .exclude(excluded)
                .paginate(2, 1),
        )
        .expect("should list questions");
    assert_eq!(total, 2);
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].id, kept[1]);
}

#[test]
fn huge_page_is_empty() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let seeded = common::seed_questions(&repo);

    let (total, items) = repo
        .list_questions(QuestionListQuery::default().paginate(usize::MAX, 10))
        .expect("should list questions");

    assert_eq!(total, seeded.len());
    assert!(items.is_empty());
}

#[test]
fn delete_question_removes_the_row() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let seeded = common::seed_questions(&repo);
    let target = seeded[1].id;

    let affected = repo.delete_question(target).expect("should delete");
    let again = repo.delete_question(target).expect("should run delete");

    assert_eq!(affected, 1);
    assert_eq!(again, 0);
    assert!(
        repo.get_question_by_id(target)
            .expect("should query question")
            .is_none()
    );
}
