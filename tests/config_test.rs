use fastapi_init::config::{
    validate_name, Choice, Database, Linter, Orm, ProjectConfig, TestFramework, BASE_PACKAGES,
};
use fastapi_init::error::Error;

fn config(
    database: Database,
    orm: Orm,
    linter: Linter,
    test_framework: TestFramework,
) -> ProjectConfig {
    ProjectConfig {
        name: "demo".to_string(),
        database,
        orm,
        linter,
        test_framework,
        docker: false,
    }
}

#[test]
fn test_valid_names() {
    for name in ["demo", "my-app", "my_app", "_private", "App2", "a-b-c_1", "café", "名前"] {
        assert!(validate_name(name).is_ok(), "{name} should be valid");
    }
}

#[test]
fn test_identifier_names_beyond_letters() {
    // combining mark after a letter, and a letter-number as first character
    for name in ["cafe\u{301}", "\u{216B}", "\u{216B}_app"] {
        assert!(validate_name(name).is_ok(), "{name} should be valid");
    }
    for name in ["\u{301}cafe", "app\u{2003}x"] {
        assert!(validate_name(name).is_err(), "{name:?} should be invalid");
    }
}

#[test]
fn test_config_display() {
    let mut config = ProjectConfig::with_defaults("demo");
    assert_eq!(
        config.to_string(),
        "demo (database: sqlite, orm: sqlalchemy, linter: ruff, tests: pytest, docker: yes)"
    );

    config.database = Database::Postgresql;
    config.test_framework = TestFramework::PytestAsyncio;
    config.docker = false;
    assert_eq!(
        config.to_string(),
        "demo (database: postgresql, orm: sqlalchemy, linter: ruff, tests: pytest-asyncio, docker: no)"
    );
}

#[test]
fn test_invalid_names() {
    for name in ["", "123abc", "1-app", "my app", "my.app", "app/evil", "a!b"] {
        match validate_name(name) {
            Err(Error::InvalidName { name: rejected }) => assert_eq!(rejected, name),
            other => panic!("expected InvalidName for {name:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_defaults() {
    let config = ProjectConfig::with_defaults("demo");
    assert_eq!(config.database, Database::Sqlite);
    assert_eq!(config.orm, Orm::Sqlalchemy);
    assert_eq!(config.linter, Linter::Ruff);
    assert_eq!(config.test_framework, TestFramework::Pytest);
    assert!(config.docker);
}

#[test]
fn test_prompt_labels() {
    let labels: Vec<_> = Database::ALL.iter().map(Choice::label).collect();
    assert_eq!(labels, ["None", "SQLite", "MySQL", "PostgreSQL"]);

    let labels: Vec<_> = TestFramework::ALL.iter().map(Choice::label).collect();
    assert_eq!(labels, ["None", "PyTest", "pytest-async-io"]);
}

#[test]
fn test_minimal_dependencies_are_the_base_list() {
    let config = config(Database::None, Orm::None, Linter::None, TestFramework::None);
    assert_eq!(config.dependencies(), BASE_PACKAGES.to_vec());
}

#[test]
fn test_dependency_order() {
    let config = config(
        Database::Postgresql,
        Orm::Sqlmodel,
        Linter::Black,
        TestFramework::PytestAsyncio,
    );
    assert_eq!(
        config.dependencies(),
        [
            "fastapi",
            "uvicorn[standard]",
            "pydantic",
            "pydantic-settings",
            "python-dotenv",
            "sqlalchemy",
            "sqlmodel",
            "pytest",
            "pytest-asyncio",
            "httpx",
            "black",
            "psycopg2-binary",
        ]
    );
}

#[test]
fn test_sqlite_needs_no_driver() {
    let config = config(Database::Sqlite, Orm::Sqlalchemy, Linter::Ruff, TestFramework::Pytest);
    let deps = config.dependencies();
    assert_eq!(&deps[BASE_PACKAGES.len()..], ["sqlalchemy", "pytest", "httpx", "ruff"]);
}

#[test]
fn test_mysql_driver() {
    let config = config(Database::Mysql, Orm::None, Linter::None, TestFramework::None);
    assert_eq!(config.dependencies().last(), Some(&"pymysql"));
}

#[test]
fn test_every_combination_has_no_duplicate_packages() {
    for &database in Database::ALL {
        for &orm in Orm::ALL {
            for &linter in Linter::ALL {
                for &test_framework in TestFramework::ALL {
                    let deps = config(database, orm, linter, test_framework).dependencies();
                    let mut unique = deps.clone();
                    unique.sort_unstable();
                    unique.dedup();
                    assert_eq!(unique.len(), deps.len(), "{deps:?}");
                }
            }
        }
    }
}

#[test]
fn test_db_layer_predicate() {
    assert!(!config(Database::None, Orm::None, Linter::None, TestFramework::None).has_db_layer());
    assert!(config(Database::None, Orm::Sqlmodel, Linter::None, TestFramework::None).has_db_layer());
    assert!(config(Database::Mysql, Orm::None, Linter::None, TestFramework::None).has_db_layer());
}

#[test]
fn test_database_urls() {
    assert_eq!(Database::None.url(), None);
    assert_eq!(Database::Sqlite.url(), Some("sqlite:///./app.db"));
    assert!(Database::Mysql.url().unwrap().starts_with("mysql+pymysql://"));
    assert!(Database::Postgresql.url().unwrap().starts_with("postgresql+psycopg2://"));
}
