use crate::{
    default, ColumnMetadata, DatabaseMetadata, DependentColumn, ExtensionMetadata,
    ForeignKeyMetadata, FunctionMetadata, IndexMetadata, SchemaMetadata, TableMetadata,
    ViewMetadata,
};

/// Installs a tracing subscriber so `RUST_LOG=trace cargo test` shows codec output.
/// Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn users_table() -> TableMetadata {
    TableMetadata {
        name: "users".to_string(),
        columns: vec![
            ColumnMetadata {
                name: "id".to_string(),
                position: 1,
                data_type: "int".to_string(),
                ..default()
            },
            ColumnMetadata {
                name: "email".to_string(),
                position: 2,
                default: Some("".to_string()),
                nullable: true,
                data_type: "varchar(255)".to_string(),
                character_set: "utf8mb4".to_string(),
                collation: "utf8mb4_general_ci".to_string(),
                comment: "login address".to_string(),
            },
            ColumnMetadata {
                name: "created_at".to_string(),
                position: 3,
                default: Some("CURRENT_TIMESTAMP".to_string()),
                data_type: "timestamp".to_string(),
                ..default()
            },
        ],
        indexes: vec![
            IndexMetadata {
                name: "PRIMARY".to_string(),
                expressions: vec!["id".to_string()],
                index_type: "BTREE".to_string(),
                unique: true,
                primary: true,
                visible: true,
                ..default()
            },
            IndexMetadata {
                name: "idx_email_lower".to_string(),
                expressions: vec!["lower(email)".to_string(), "id".to_string()],
                index_type: "BTREE".to_string(),
                unique: true,
                visible: true,
                comment: "case-insensitive lookup".to_string(),
                ..default()
            },
        ],
        engine: "InnoDB".to_string(),
        collation: "utf8mb4_general_ci".to_string(),
        row_count: 1000,
        data_size: 1 << 40,
        index_size: 16384,
        data_free: 0,
        create_options: "row_format=DYNAMIC".to_string(),
        comment: "registered users".to_string(),
        foreign_keys: vec![],
    }
}

pub fn orders_table() -> TableMetadata {
    TableMetadata {
        name: "orders".to_string(),
        columns: vec![
            ColumnMetadata::new("id", 1, "bigint"),
            ColumnMetadata::new("user_id", 2, "int"),
            ColumnMetadata::new("tenant_id", 3, "int"),
        ],
        foreign_keys: vec![ForeignKeyMetadata {
            name: "fk_orders_user".to_string(),
            columns: vec!["tenant_id".to_string(), "user_id".to_string()],
            referenced_schema: "public".to_string(),
            referenced_table: "users".to_string(),
            referenced_columns: vec!["tenant_id".to_string(), "id".to_string()],
            on_delete: "CASCADE".to_string(),
            on_update: "NO ACTION".to_string(),
            match_type: "SIMPLE".to_string(),
        }],
        ..default()
    }
}

pub fn sample_database() -> DatabaseMetadata {
    DatabaseMetadata {
        name: "shop".to_string(),
        schemas: vec![
            SchemaMetadata {
                name: "public".to_string(),
                tables: vec![users_table(), orders_table()],
                views: vec![ViewMetadata {
                    name: "active_users".to_string(),
                    definition: "select id, email from users where active".to_string(),
                    comment: "".to_string(),
                    dependent_columns: vec![
                        DependentColumn {
                            schema: "public".to_string(),
                            table: "users".to_string(),
                            column: "id".to_string(),
                        },
                        DependentColumn {
                            schema: "public".to_string(),
                            table: "users".to_string(),
                            column: "email".to_string(),
                        },
                    ],
                }],
                functions: vec![FunctionMetadata {
                    name: "touch".to_string(),
                    definition: "begin new.updated_at = now(); return new; end".to_string(),
                }],
            },
            SchemaMetadata {
                name: "audit".to_string(),
                ..default()
            },
        ],
        character_set: "UTF8".to_string(),
        collation: "en_US.UTF-8".to_string(),
        extensions: vec![ExtensionMetadata {
            name: "pg_trgm".to_string(),
            schema: "public".to_string(),
            version: "1.6".to_string(),
            description: "text similarity measurement".to_string(),
        }],
    }
}
