pub use sea_orm_migration::prelude::*;

mod iden;

mod m20141012_000000_create_users_table;
mod m20220101_000000_create_permission_tables;
mod m20220101_000001_create_settings_table;
mod m20220101_000002_create_countries_table;
mod m20220101_000003_create_cms_table;
mod m20220101_000004_create_email_settings_table;
mod m20220201_000000_create_events_table;
mod m20220201_000001_create_designers_table;
mod m20220213_192948_create_rsvps_table;
mod m20220214_165555_create_event_bookings_table;
mod m20220609_112344_create_check_users_table;
mod m20220609_123108_add_whatsapp_no_to_check_users;
mod m20220609_130428_add_arr_data_to_check_users;
mod m20230101_000000_create_templates_table;
mod m20230101_000001_create_shows_table;
mod m20230221_111548_create_event_designers_table;
mod m20230222_142659_create_model_back_stages_table;
mod m20231003_121838_add_designer_approved_to_event_bookings;
mod m20231003_172830_add_is_vip_to_rsvps;
mod m20231004_142016_add_templates_id_to_shows;
mod m20240102_155410_create_seat_plans_table;
mod m20240102_155453_create_seat_plan_blocks_table;
mod m20240102_155517_create_block_details_table;
mod m20240104_154651_add_seat_id_to_designers;
mod m20240108_161438_add_seat_designer_to_event_bookings;
mod m20240111_160712_add_color_to_designers;
mod m20240112_105230_add_event_type_to_events;
mod m20240115_135757_add_approved_type_to_event_bookings;
mod m20240117_150227_add_form_type_to_designers;
mod m20240119_104705_add_price_to_block_details;
mod m20240124_143841_create_rsvp_designer_histories_table;
mod m20240126_135359_add_special_to_check_users;
mod m20240126_135438_add_special_to_rsvps;
mod m20240314_133426_add_promocodes_to_designers;
mod m20240314_142725_create_assign_calls_table;
mod m20240509_144950_add_price_to_shows;
mod m20240517_112350_add_total_price_to_rsvps;
mod m20240521_173354_add_zoom_level_to_seat_plans;
mod m20240702_121648_add_default_open_to_shows;
mod m20240724_122550_create_upload_rsvps_table;
mod m20240822_170253_add_show_and_event_to_check_users;
mod m20240903_102722_add_blacklist_to_email_settings;
mod m20241230_103216_add_email_and_password_to_designers;
mod m20241230_111518_add_designer_id_to_users;
mod m20250120_152912_add_show_type_to_shows;
mod m20250120_153712_add_pre_show_approval_to_rsvps;
mod m20250122_171135_add_demographics_to_rsvps;
mod m20250129_000000_create_chats_table;
mod m20250129_164724_create_messages_table;
mod m20250306_120912_add_dimensions_to_seat_plan_blocks;
mod m20250409_101551_create_email_accounts_table;
mod m20250421_182036_create_projects_table;

/// How faithfully a step's `down` undoes its `up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Downgrade {
    Reversible,
    /// `down` does nothing; the objects added by `up` stay in place.
    Empty,
    /// `down` names an object that was never created, so it changes nothing.
    MissingTarget(&'static str),
}

impl Downgrade {
    pub fn is_reversible(&self) -> bool {
        matches!(self, Downgrade::Reversible)
    }
}

fn step<M: MigrationTrait + 'static>(
    migration: M,
    downgrade: Downgrade,
) -> (Box<dyn MigrationTrait>, Downgrade) {
    (Box::new(migration), downgrade)
}

pub struct Migrator;

impl Migrator {
    /// Every step in timestamp order, paired with its downgrade behaviour.
    pub fn steps() -> Vec<(Box<dyn MigrationTrait>, Downgrade)> {
        use Downgrade::*;

        vec![
            step(m20141012_000000_create_users_table::Migration, Reversible),
            step(m20220101_000000_create_permission_tables::Migration, Reversible),
            step(m20220101_000001_create_settings_table::Migration, Reversible),
            step(m20220101_000002_create_countries_table::Migration, Reversible),
            step(m20220101_000003_create_cms_table::Migration, Reversible),
            step(m20220101_000004_create_email_settings_table::Migration, Reversible),
            step(m20220201_000000_create_events_table::Migration, Reversible),
            step(m20220201_000001_create_designers_table::Migration, Reversible),
            step(m20220213_192948_create_rsvps_table::Migration, Reversible),
            step(m20220214_165555_create_event_bookings_table::Migration, Reversible),
            step(m20220609_112344_create_check_users_table::Migration, Reversible),
            step(m20220609_123108_add_whatsapp_no_to_check_users::Migration, Empty),
            step(m20220609_130428_add_arr_data_to_check_users::Migration, Empty),
            step(m20230101_000000_create_templates_table::Migration, Reversible),
            step(m20230101_000001_create_shows_table::Migration, Reversible),
            step(m20230221_111548_create_event_designers_table::Migration, Reversible),
            step(m20230222_142659_create_model_back_stages_table::Migration, MissingTarget("model_bacl_stages")),
            step(m20231003_121838_add_designer_approved_to_event_bookings::Migration, Reversible),
            step(m20231003_172830_add_is_vip_to_rsvps::Migration, Reversible),
            step(m20231004_142016_add_templates_id_to_shows::Migration, Reversible),
            step(m20240102_155410_create_seat_plans_table::Migration, Reversible),
            step(m20240102_155453_create_seat_plan_blocks_table::Migration, Reversible),
            step(m20240102_155517_create_block_details_table::Migration, Reversible),
            step(m20240104_154651_add_seat_id_to_designers::Migration, Reversible),
            step(m20240108_161438_add_seat_designer_to_event_bookings::Migration, Reversible),
            step(m20240111_160712_add_color_to_designers::Migration, Reversible),
            step(m20240112_105230_add_event_type_to_events::Migration, Reversible),
            step(m20240115_135757_add_approved_type_to_event_bookings::Migration, Reversible),
            step(m20240117_150227_add_form_type_to_designers::Migration, Reversible),
            step(m20240119_104705_add_price_to_block_details::Migration, Reversible),
            step(m20240124_143841_create_rsvp_designer_histories_table::Migration, Reversible),
            step(m20240126_135359_add_special_to_check_users::Migration, Empty),
            step(m20240126_135438_add_special_to_rsvps::Migration, Empty),
            step(m20240314_133426_add_promocodes_to_designers::Migration, Reversible),
            step(m20240314_142725_create_assign_calls_table::Migration, Reversible),
            step(m20240509_144950_add_price_to_shows::Migration, Reversible),
            step(m20240517_112350_add_total_price_to_rsvps::Migration, Reversible),
            step(m20240521_173354_add_zoom_level_to_seat_plans::Migration, Reversible),
            step(m20240702_121648_add_default_open_to_shows::Migration, Reversible),
            step(m20240724_122550_create_upload_rsvps_table::Migration, Reversible),
            step(m20240822_170253_add_show_and_event_to_check_users::Migration, Reversible),
            step(m20240903_102722_add_blacklist_to_email_settings::Migration, Reversible),
            step(m20241230_103216_add_email_and_password_to_designers::Migration, Reversible),
            step(m20241230_111518_add_designer_id_to_users::Migration, Reversible),
            step(m20250120_152912_add_show_type_to_shows::Migration, MissingTarget("show")),
            step(m20250120_153712_add_pre_show_approval_to_rsvps::Migration, Empty),
            step(m20250122_171135_add_demographics_to_rsvps::Migration, Empty),
            step(m20250129_000000_create_chats_table::Migration, Reversible),
            step(m20250129_164724_create_messages_table::Migration, Reversible),
            step(m20250306_120912_add_dimensions_to_seat_plan_blocks::Migration, Empty),
            step(m20250409_101551_create_email_accounts_table::Migration, Reversible),
            step(m20250421_182036_create_projects_table::Migration, Reversible),
        ]
    }

    pub fn downgrade_of(name: &str) -> Option<Downgrade> {
        Self::steps()
            .into_iter()
            .find(|(step, _)| step.name() == name)
            .map(|(_, downgrade)| downgrade)
    }
}

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        Self::steps().into_iter().map(|(step, _)| step).collect()
    }
}
