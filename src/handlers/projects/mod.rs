// handlers/projects/mod.rs - project CRUD handlers
//
// Every handler runs the same fixed pipeline: store env, identity, path
// identifiers, body, then the repository call. Ownership is anchored on the
// record's adminId and checked against the caller identity where the
// operation requires it.

pub mod create; // POST /projects
pub mod delete; // DELETE /projects/:project_id
pub mod get; // GET /projects/:project_id
pub mod list; // GET /projects
pub mod update; // PUT /projects/:project_id

pub use create::create;
pub use delete::delete;
pub use get::get;
pub use list::list;
pub use update::update;
