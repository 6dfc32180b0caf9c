pub mod admin;

pub mod catalog;

pub mod contact;

pub mod documents;

pub mod events;

pub mod facilities;

pub mod faculty;

pub mod links;

pub mod media;

pub mod students;

pub use admin::configure_admin_routes;
pub use catalog::configure_catalog_routes;
pub use contact::configure_contact_routes;
pub use documents::configure_document_routes;
pub use events::configure_event_routes;
pub use facilities::configure_facility_routes;
pub use faculty::configure_faculty_routes;
pub use links::configure_link_routes;
pub use media::configure_media_routes;
pub use students::configure_student_routes;
