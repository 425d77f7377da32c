// End-to-end tests for the Shh-elf backend API
//
// Every test gets its own application instance on a random local port, wired
// through the real router, middleware, services and controllers. Speech,
// text generation, object storage and email are replaced by in-process fakes
// and the account/history stores are in memory, so the suite runs without
// network access or a database.
//
// `test_repositories` exercises the Postgres repositories against a shared
// testcontainers instance and is ignored unless docker is available:
//
//     cargo test -- --ignored

mod helpers;
mod test_auth;
mod test_discovery;
mod test_health;
