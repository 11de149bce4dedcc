// ─── Catalog Resolution Core ───
// Resolves mod identities and file metadata against the CurseForge catalog.
//
// Architecture:
//   core/
//     config/      — Endpoints, user agent, fixed search parameters
//     http/        — Shared client, JSON request shaping, tolerant decoding
//     client/      — CatalogClient handle + identity checks
//     model/       — ModRecord, FileRecord and their closed enumerations
//     resolver/    — Slug → mod id over the GraphQL proxy
//     reader/      — Mod and file metadata, single and batch
//     search/      — Free-text search with loader/version filters
//     fingerprint/ — Murmur2 fingerprint reconciliation
//     hash/        — Best-hash selection and content verification
//     date/        — Tolerant file timestamp parsing

pub mod client;
pub mod config;
pub mod date;
pub mod error;
pub mod fingerprint;
pub mod hash;
pub(crate) mod http;
pub mod model;
pub mod reader;
pub mod resolver;
pub mod search;
