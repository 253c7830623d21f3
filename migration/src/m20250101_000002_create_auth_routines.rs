use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Reference bodies for the two routines the service invokes. Deployments may
/// replace them as long as the signatures stay intact: a scalar validator and
/// a side-effecting client insert.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared(r#"CREATE SCHEMA IF NOT EXISTS dbo"#)
            .await?;

        conn.execute_unprepared(
            r#"
            CREATE OR REPLACE FUNCTION "ValidateUser"("UserName" text, "Password" text)
            RETURNS integer
            LANGUAGE sql
            STABLE
            AS $$
                SELECT count(*)::integer
                FROM clients c
                WHERE c.user_name = "UserName"
                  AND c.password = "Password";
            $$
            "#,
        )
        .await?;

        conn.execute_unprepared(
            r#"
            CREATE OR REPLACE PROCEDURE dbo."CreateClient"("UserName" text, "Password" text)
            LANGUAGE sql
            AS $$
                INSERT INTO clients (user_name, password)
                VALUES ("UserName", "Password");
            $$
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared(r#"DROP PROCEDURE IF EXISTS dbo."CreateClient"(text, text)"#)
            .await?;
        conn.execute_unprepared(r#"DROP FUNCTION IF EXISTS "ValidateUser"(text, text)"#)
            .await?;
        conn.execute_unprepared(r#"DROP SCHEMA IF EXISTS dbo"#).await?;

        Ok(())
    }
}
