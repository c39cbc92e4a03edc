//! Builds parameterized partial UPDATE statements. Identifiers come from code only; values are bound.

use crate::model::Patch;
use sqlx::{Encode, PgPool, Postgres, QueryBuilder, Type};

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// `UPDATE <table> SET "updated_at" = NOW()[, col = $n ...] WHERE ...`
///
/// Assignments must all be added before the first filter.
pub struct UpdateQuery<'args> {
    qb: QueryBuilder<'args, Postgres>,
    assignments: usize,
    filters: usize,
}

impl<'args> UpdateQuery<'args> {
    pub fn new(table: &str) -> Self {
        let qb = QueryBuilder::new(format!(
            "UPDATE {} SET {} = NOW()",
            quoted(table),
            quoted("updated_at")
        ));
        UpdateQuery {
            qb,
            assignments: 0,
            filters: 0,
        }
    }

    pub fn set<T>(&mut self, column: &str, value: T) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        debug_assert_eq!(self.filters, 0, "assignment after WHERE");
        self.qb.push(", ").push(quoted(column)).push(" = ").push_bind(value);
        self.assignments += 1;
        self
    }

    /// Assign only when the caller supplied a value.
    pub fn set_opt<T>(&mut self, column: &str, value: Option<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        if let Some(v) = value {
            self.set(column, v);
        }
        self
    }

    /// Skip when absent, bind NULL when cleared.
    pub fn set_patch<T>(&mut self, column: &str, value: Patch<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        if let Some(change) = value.into_change() {
            self.set(column, change);
        }
        self
    }

    pub fn filter<T>(&mut self, column: &str, value: T) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        self.push_condition();
        self.qb.push(quoted(column)).push(" = ").push_bind(value);
        self
    }

    /// Exclude soft-deleted rows.
    pub fn live(&mut self) -> &mut Self {
        self.push_condition();
        self.qb.push(quoted("deleted_at")).push(" IS NULL");
        self
    }

    fn push_condition(&mut self) {
        self.qb.push(if self.filters == 0 { " WHERE " } else { " AND " });
        self.filters += 1;
    }

    /// Number of caller-supplied assignments (the timestamp refresh is not counted).
    pub fn assignments(&self) -> usize {
        self.assignments
    }

    pub fn sql(&self) -> &str {
        self.qb.sql()
    }

    /// Run the statement; returns the number of rows it touched.
    pub async fn execute(mut self, pool: &PgPool) -> Result<u64, sqlx::Error> {
        debug_assert!(self.filters > 0, "UPDATE without WHERE");
        tracing::debug!(sql = %self.qb.sql(), "query");
        let result = self.qb.build().execute(pool).await?;
        Ok(result.rows_affected())
    }
}
