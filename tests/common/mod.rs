//! Helpers for integration tests.
#![allow(dead_code)]

use diesel_migrations::MigrationHarness;
use tempfile::NamedTempFile;
use trivia_api::db::{DbPool, MIGRATIONS, establish_connection_pool};
use trivia_api::domain::question::{NewQuestion, Question};
use trivia_api::domain::types::{AnswerText, CategoryId, Difficulty, QuestionText};
use trivia_api::repository::{DieselRepository, QuestionWriter};

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

pub fn new_question(text: &str, answer: &str, category: i32, difficulty: i32) -> NewQuestion {
    NewQuestion {
        question: QuestionText::new(text).expect("valid question"),
        answer: AnswerText::new(answer).expect("valid answer"),
        category: CategoryId::new(category).expect("valid category"),
        difficulty: Difficulty::new(difficulty).expect("valid difficulty"),
    }
}

/// Insert a small trivia set: 19 questions over the six seeded categories,
/// two of which mention soccer.
pub fn seed_questions(repo: &DieselRepository) -> Vec<Question> {
    let rows = [
        ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
        ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
        ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
        ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
        ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
        ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
        ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
        ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
        ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
        ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
        ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
        ("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
        ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
        ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
        ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
        ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
        ("Title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ];

    rows.into_iter()
        .map(|(text, answer, category, difficulty)| {
            repo.create_question(&new_question(text, answer, category, difficulty))
                .expect("should create question")
        })
        .collect()
}
