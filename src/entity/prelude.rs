//! 预导入模块，方便使用

pub use super::admissions::Entity as Admissions;
pub use super::books::Entity as Books;
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::contact_messages::{
    ActiveModel as ContactMessageActiveModel, Entity as ContactMessages,
};
pub use super::departments::{
    ActiveModel as DepartmentActiveModel, Entity as Departments, Model as DepartmentModel,
};
pub use super::event_news::{ActiveModel as EventNewsActiveModel, Entity as EventNews};
pub use super::event_news_images::{
    ActiveModel as EventNewsImageActiveModel, Entity as EventNewsImages,
};
pub use super::faculty_members::{
    ActiveModel as FacultyMemberActiveModel, Entity as FacultyMembers,
};
pub use super::facility_infos::{ActiveModel as FacilityInfoActiveModel, Entity as FacilityInfos};
pub use super::facility_types::{ActiveModel as FacilityTypeActiveModel, Entity as FacilityTypes};
pub use super::gallery::{ActiveModel as GalleryActiveModel, Entity as Gallery};
pub use super::important_links::{
    ActiveModel as ImportantLinkActiveModel, Entity as ImportantLinks,
};
pub use super::notice_types::{ActiveModel as NoticeTypeActiveModel, Entity as NoticeTypes};
pub use super::notices::Entity as Notices;
pub use super::results::Entity as Results;
pub use super::routine_types::{ActiveModel as RoutineTypeActiveModel, Entity as RoutineTypes};
pub use super::routines::Entity as Routines;
pub use super::students::{ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel};
pub use super::syllabuses::Entity as Syllabuses;
pub use super::videos::{ActiveModel as VideoActiveModel, Entity as Videos};
