pub use super::assign_call::Entity as AssignCall;
pub use super::block_detail::Entity as BlockDetail;
pub use super::chat::Entity as Chat;
pub use super::check_user::Entity as CheckUser;
pub use super::cms::Entity as Cms;
pub use super::country::Entity as Country;
pub use super::designer::Entity as Designer;
pub use super::email_account::Entity as EmailAccount;
pub use super::email_setting::Entity as EmailSetting;
pub use super::event::Entity as Event;
pub use super::event_booking::Entity as EventBooking;
pub use super::event_designer::Entity as EventDesigner;
pub use super::message::Entity as Message;
pub use super::model_back_stage::Entity as ModelBackStage;
pub use super::model_has_permission::Entity as ModelHasPermission;
pub use super::model_has_role::Entity as ModelHasRole;
pub use super::permission::Entity as Permission;
pub use super::project::Entity as Project;
pub use super::role::Entity as Role;
pub use super::role_has_permission::Entity as RoleHasPermission;
pub use super::rsvp::Entity as Rsvp;
pub use super::rsvp_designer_history::Entity as RsvpDesignerHistory;
pub use super::seat_plan::Entity as SeatPlan;
pub use super::seat_plan_block::Entity as SeatPlanBlock;
pub use super::setting::Entity as Setting;
pub use super::show::Entity as Show;
pub use super::template::Entity as Template;
pub use super::upload_rsvp::Entity as UploadRsvp;
pub use super::user::Entity as User;
