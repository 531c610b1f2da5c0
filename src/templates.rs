//! Embedded template sources for the generated project.
//! Every source lives under `templates/` as a `.j2` file and is compiled into the binary.
//! Variant templates are picked through the lookup functions at the bottom.

use crate::config::Orm;

macro_rules! template {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path, ".j2"))
    };
}

/// Content of every `__init__.py` package marker.
pub const PACKAGE_MARKER: &str = "";

pub const APP_MAIN: &str = template!("app/main.py");
pub const APP_README: &str = template!("app/README.md");

pub const API_INIT: &str = template!("app/api/__init__.py");
pub const API_DEPS: &str = template!("app/api/deps.py");
pub const API_README: &str = template!("app/api/README.md");
pub const API_V1_USERS: &str = template!("app/api/v1/users.py");
pub const API_V1_README: &str = template!("app/api/v1/README.md");

pub const CORE_CONFIG: &str = template!("app/core/config.py");
pub const CORE_SECURITY: &str = template!("app/core/security.py");
pub const CORE_README: &str = template!("app/core/README.md");

pub const MODELS_USER_SQLALCHEMY: &str = template!("app/models/user.sqlalchemy.py");
pub const MODELS_USER_SQLMODEL: &str = template!("app/models/user.sqlmodel.py");
pub const MODELS_README: &str = template!("app/models/README.md");

pub const SCHEMAS_USER: &str = template!("app/schemas/user.py");
pub const SCHEMAS_README: &str = template!("app/schemas/README.md");

pub const SERVICES_USER_SERVICE: &str = template!("app/services/user_service.py");
pub const SERVICES_README: &str = template!("app/services/README.md");

pub const DB_BASE_SQLALCHEMY: &str = template!("app/db/base.sqlalchemy.py");
pub const DB_BASE_SQLMODEL: &str = template!("app/db/base.sqlmodel.py");
pub const DB_SESSION_SQLALCHEMY: &str = template!("app/db/session.sqlalchemy.py");
pub const DB_SESSION_SQLMODEL: &str = template!("app/db/session.sqlmodel.py");
pub const DB_README: &str = template!("app/db/README.md");

pub const TESTS_USERS: &str = template!("tests/test_users.py");
pub const TESTS_README: &str = template!("tests/README.md");

pub const ENV: &str = template!("env");
pub const GITIGNORE: &str = template!("gitignore");
pub const DOCKERIGNORE: &str = template!("dockerignore");
pub const DOCKERFILE: &str = template!("Dockerfile");
pub const DOCKER_COMPOSE: &str = template!("docker-compose.yml");
pub const PYPROJECT: &str = template!("pyproject.toml");
pub const README: &str = template!("README.md");

/// `app/models/user.py` source for the selected ORM, if a model is emitted at all.
pub fn model_template(orm: Orm) -> Option<&'static str> {
    match orm {
        Orm::None => None,
        Orm::Sqlalchemy => Some(MODELS_USER_SQLALCHEMY),
        Orm::Sqlmodel => Some(MODELS_USER_SQLMODEL),
    }
}

/// `app/db/base.py` source. A database without an ORM gets the SQLAlchemy base.
pub fn base_template(orm: Orm) -> &'static str {
    match orm {
        Orm::Sqlmodel => DB_BASE_SQLMODEL,
        Orm::None | Orm::Sqlalchemy => DB_BASE_SQLALCHEMY,
    }
}

/// `app/db/session.py` source; the connection URL is filled in from the context.
pub fn session_template(orm: Orm) -> &'static str {
    match orm {
        Orm::Sqlmodel => DB_SESSION_SQLMODEL,
        Orm::None | Orm::Sqlalchemy => DB_SESSION_SQLALCHEMY,
    }
}
