use log::debug;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbBackend, QueryResult, Statement, TryGetable,
    Value,
};

use crate::types::error::AppError;

/// Keyed routine parameters, rendered in declaration order as Postgres
/// named-notation arguments. A null [`Value`] is bound as SQL `NULL`, never
/// omitted.
pub type ProcParams = Vec<(&'static str, Value)>;

#[derive(Clone, Copy)]
enum CallKind {
    /// `SELECT * FROM "Proc"(...)` — rows from a set-returning routine.
    Query,
    /// `CALL "Proc"(...)` — side effects only, affected-row count back.
    NonQuery,
    /// `SELECT "Proc"(...)` — first column of the first row.
    Scalar,
}

/// Executes named stored routines over a single lazily-opened connection.
///
/// One manager is built per request and owns its connection exclusively.
/// Dropping the manager releases the connection on every exit path; callers
/// that want the close error use [`DatabaseManager::close`].
#[derive(Debug)]
pub struct DatabaseManager {
    url: String,
    connection: Option<DatabaseConnection>,
}

impl DatabaseManager {
    pub fn new(url: &str) -> Result<Self, AppError> {
        if url.trim().is_empty() {
            return Err(AppError::Configuration(
                "database connection string is empty".into(),
            ));
        }
        Ok(DatabaseManager {
            url: url.to_string(),
            connection: None,
        })
    }

    /// Opens the connection if not already open.
    async fn connection(&mut self) -> Result<&DatabaseConnection, AppError> {
        let conn = match self.connection.take() {
            Some(conn) => conn,
            None => {
                debug!("Opening database connection");
                Database::connect(self.url.as_str()).await?
            }
        };
        Ok(self.connection.insert(conn))
    }

    /// Runs a routine expected to return rows.
    pub async fn execute_query(
        &mut self,
        procedure: &str,
        params: ProcParams,
    ) -> Result<Vec<QueryResult>, AppError> {
        let stmt = call_statement(CallKind::Query, procedure, params)?;
        Ok(self.connection().await?.query_all(stmt).await?)
    }

    /// Runs a routine with insert/update/delete semantics and returns the
    /// affected-row count.
    pub async fn execute_non_query(
        &mut self,
        procedure: &str,
        params: ProcParams,
    ) -> Result<u64, AppError> {
        let stmt = call_statement(CallKind::NonQuery, procedure, params)?;
        Ok(self.connection().await?.execute(stmt).await?.rows_affected())
    }

    /// Runs a routine and returns the first column of the first row, or
    /// `None` when there is no row or the value is SQL null.
    pub async fn execute_scalar<T: TryGetable>(
        &mut self,
        procedure: &str,
        params: ProcParams,
    ) -> Result<Option<T>, AppError> {
        let stmt = call_statement(CallKind::Scalar, procedure, params)?;
        match self.connection().await?.query_one(stmt).await? {
            Some(row) => Ok(row
                .try_get_by_index::<Option<T>>(0)
                .map_err(sea_orm::DbErr::from)?),
            None => Ok(None),
        }
    }

    /// Releases the connection explicitly.
    pub async fn close(mut self) -> Result<(), AppError> {
        if let Some(conn) = self.connection.take() {
            conn.close().await?;
        }
        Ok(())
    }
}

/// Renders `"Schema"."Proc"("Name" => $1, ...)` and binds the values.
/// Fails before any connection is opened when the routine name is empty.
fn call_statement(
    kind: CallKind,
    procedure: &str,
    params: ProcParams,
) -> Result<Statement, AppError> {
    if procedure.trim().is_empty() {
        return Err(AppError::Configuration(
            "stored procedure name is empty".into(),
        ));
    }

    let args = params
        .iter()
        .enumerate()
        .map(|(i, (name, _))| format!("{} => ${}", quote_ident(name), i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let call = format!("{}({})", qualified_name(procedure), args);
    let sql = match kind {
        CallKind::Query => format!("SELECT * FROM {}", call),
        CallKind::NonQuery => format!("CALL {}", call),
        CallKind::Scalar => format!("SELECT {}", call),
    };

    Ok(Statement::from_sql_and_values(
        DbBackend::Postgres,
        sql,
        params.into_iter().map(|(_, v)| v),
    ))
}

fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Quotes each segment of a possibly schema-qualified routine name.
fn qualified_name(procedure: &str) -> String {
    procedure
        .split('.')
        .map(quote_ident)
        .collect::<Vec<_>>()
        .join(".")
}
