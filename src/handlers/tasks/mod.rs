// handlers/tasks/mod.rs - task CRUD handlers, scoped to a project
//
// Same pipeline as the project handlers, with the owning project id taken
// from the request path. projectId, adminId, createdBy and dateTime are
// server-assigned on every write; the body only ever supplies title,
// description and state.

pub mod create; // POST /projects/:project_id/tasks
pub mod delete; // DELETE /projects/:project_id/tasks/:task_id
pub mod get; // GET /projects/:project_id/tasks/:task_id
pub mod list; // GET /projects/:project_id/tasks
pub mod update; // PUT /projects/:project_id/tasks/:task_id

pub use create::create;
pub use delete::delete;
pub use get::get;
pub use list::list;
pub use update::update;
