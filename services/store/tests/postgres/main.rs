//! Repository, use-case and router checks against a migrated Postgres
//! started with testcontainers. Needs a running Docker daemon.

mod catalog_test;
