use std::collections::BTreeSet;

use diesel::prelude::*;

use crate::domain::question::{NewQuestion, Question};
use crate::domain::types::QuestionId;
use crate::models::question::{NewQuestion as DbNewQuestion, Question as DbQuestion};
use crate::repository::{
    DieselRepository, QuestionListQuery, QuestionReader, QuestionWriter, RepositoryResult,
};

/// Most excluded ids bound as SQL parameters; longer lists are filtered after
/// loading since SQLite caps the number of bound variables.
const MAX_BOUND_EXCLUSIONS: usize = 500;

/// Builds a `LIKE` pattern matching `term` anywhere, with `%`, `_` and the
/// escape character itself matched literally.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl QuestionReader for DieselRepository {
    fn list_questions(
        &self,
        query: QuestionListQuery,
    ) -> RepositoryResult<(usize, Vec<Question>)> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let excluded: BTreeSet<i32> = query.exclude.iter().map(|id| id.get()).collect();
        let bind_exclusions = excluded.len() <= MAX_BOUND_EXCLUSIONS;

        let query_builder = || {
            let mut items = questions::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(category) = query.category {
                items = items.filter(questions::category.eq(category.get()));
            }

            if let Some(search) = &query.search {
                // SQLite's LIKE is case-insensitive for ASCII.
                items = items.filter(
                    questions::question
                        .like(contains_pattern(search))
                        .escape('\\'),
                );
            }

            if bind_exclusions && !excluded.is_empty() {
                let excluded: Vec<i32> = excluded.iter().copied().collect();
                items = items.filter(questions::id.ne_all(excluded));
            }

            items
        };

        if !bind_exclusions {
            // Too many ids to bind: filter and page the matching rows here.
            let items = query_builder()
                .order(questions::id.asc())
                .load::<DbQuestion>(&mut conn)?
                .into_iter()
                .filter(|row| !excluded.contains(&row.id))
                .map(TryInto::try_into)
                .collect::<Result<Vec<Question>, _>>()?;

            let total = items.len();
            let items = match &query.pagination {
                Some(pagination) => pagination.window(&items).to_vec(),
                None => items,
            };
            return Ok((total, items));
        }

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            let (Ok(offset), Ok(limit)) = (
                i64::try_from(pagination.offset()),
                i64::try_from(pagination.limit()),
            ) else {
                return Ok((total, Vec::new()));
            };
            items = items.offset(offset).limit(limit);
        }

        let items = items
            .order(questions::id.asc())
            .load::<DbQuestion>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Question>, _>>()?;

        Ok((total, items))
    }

    fn get_question_by_id(&self, id: QuestionId) -> RepositoryResult<Option<Question>> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let question = questions::table
            .filter(questions::id.eq(id.get()))
            .first::<DbQuestion>(&mut conn)
            .optional()?;

        let question = question.map(TryInto::try_into).transpose()?;
        Ok(question)
    }
}

impl QuestionWriter for DieselRepository {
    fn create_question(&self, question: &NewQuestion) -> RepositoryResult<Question> {
        use crate::schema::questions;

        let mut conn = self.conn()?;
        let db_question: DbNewQuestion = question.clone().into();

        let created = diesel::insert_into(questions::table)
            .values(db_question)
            .returning(DbQuestion::as_returning())
            .get_result(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn delete_question(&self, id: QuestionId) -> RepositoryResult<usize> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(questions::table.filter(questions::id.eq(id.get()))).execute(&mut conn)?;

        Ok(affected)
    }
}
