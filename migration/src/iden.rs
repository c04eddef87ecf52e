use sea_orm_migration::prelude::*;

// Define table names
#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    FName,
    LName,
    Email,
    DesignerId,
    Phone,
    Address,
    About,
    Role,
    Approved,
    Verified,
    Otp,
    Insta,
    Linkedin,
    Country,
    Type,
    SocialId,
    OtpExpiry,
    EmailVerifiedAt,
    Password,
    RememberToken,
}

#[derive(DeriveIden)]
pub enum Permissions {
    Table,
    Id,
    Name,
    GuardName,
    Value,
}

#[derive(DeriveIden)]
pub enum Roles {
    Table,
    Id,
    Name,
    GuardName,
}

#[derive(DeriveIden)]
pub enum ModelHasPermissions {
    Table,
    PermissionId,
    ModelType,
    ModelId,
}

#[derive(DeriveIden)]
pub enum ModelHasRoles {
    Table,
    RoleId,
    ModelType,
    ModelId,
}

#[derive(DeriveIden)]
pub enum RoleHasPermissions {
    Table,
    PermissionId,
    RoleId,
}

#[derive(DeriveIden)]
pub enum Settings {
    Table,
    Id,
    Heading,
}

#[derive(DeriveIden)]
pub enum Countries {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Cms {
    Table,
    Id,
    Page,
    Data,
}

#[derive(DeriveIden)]
pub enum EmailSettings {
    Table,
    Id,
    Subject,
    Body,
    PreApproved,
    Blacklist,
}

#[derive(DeriveIden)]
pub enum Events {
    Table,
    Id,
    Name,
    Desc,
    SeatId,
    EventType,
}

#[derive(DeriveIden)]
pub enum Designers {
    Table,
    Id,
    Name,
    Email,
    Password,
    Location,
    SeatId,
    Image,
    Promocodes,
    Price,
    FormType,
    Enabled,
    Color,
}

#[derive(DeriveIden)]
pub enum Rsvps {
    Table,
    Id,
    FName,
    LName,
    Email,
    IsVip,
    Phone,
    Insta,
    Linkedin,
    Category,
    Company,
    ArticalUrl,
    WorkEmail,
    BuyerStore,
    BuyerCategory,
    Website,
    Photography,
    Code,
    Parent,
    UserId,
    ContactId,
    DesignerId,
    Waiting,
    PreApproved,
    TotalPrice,
    PreShowApproval,
    Special,
    Nationality,
    AgeRange,
    Salutation,
}

#[derive(DeriveIden)]
pub enum EventBookings {
    Table,
    Id,
    EventId,
    UserId,
    Status,
    Send,
    Seat,
    SeatDesigner,
    Join,
    Verify,
    Sync,
    Designer,
    DesignerApproved,
    ApprovedType,
}

#[derive(DeriveIden)]
pub enum CheckUsers {
    Table,
    Id,
    Ip,
    Phone,
    PhoneUser,
    Code,
    Email,
    Category,
    DesignerId,
    ShowId,
    EventId,
    WhatsappNo,
    ArrData,
    Special,
}

#[derive(DeriveIden)]
pub enum Templates {
    Table,
    Id,
    Name,
    File,
    Image,
}

#[derive(DeriveIden)]
pub enum Shows {
    Table,
    Id,
    EventId,
    Name,
    Desc,
    PriceType,
    Price,
    DefaultOpen,
    ShowType,
    Image,
    TemplatesId,
}

#[derive(DeriveIden)]
pub enum EventDesigners {
    Table,
    Id,
    DesignerId,
    EventId,
}

#[derive(DeriveIden)]
pub enum ModelBackStages {
    Table,
    Id,
    Name,
    Photo,
    Email,
    Mobile,
    Category,
    Status,
}

#[derive(DeriveIden)]
pub enum SeatPlans {
    Table,
    Id,
    Name,
    ZoomLevel,
}

#[derive(DeriveIden)]
pub enum SeatPlanBlocks {
    Table,
    Id,
    SteatplanId,
    Row,
    Column,
    Left,
    Top,
    Type,
    Height,
    Width,
}

#[derive(DeriveIden)]
pub enum BlockDetails {
    Table,
    Id,
    SeatPlanBlocksId,
    Name,
    Type,
    Position,
    Capacity,
    Price,
}

#[derive(DeriveIden)]
pub enum RsvpDesignerHistories {
    Table,
    Id,
    RsvpId,
    DesignerId,
}

#[derive(DeriveIden)]
pub enum AssignCalls {
    Table,
    Id,
    RsvpId,
    UserId,
    Read,
}

#[derive(DeriveIden)]
pub enum UploadRsvps {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Instagram,
    Linkedin,
    Category,
    Company,
    ArticalUrl,
    WorkEmail,
    BuyerStore,
    BuyerCategory,
    Website,
    Photography,
    Code,
    Designer,
    Portfolio,
}

#[derive(DeriveIden)]
pub enum Chats {
    Table,
    Id,
    RsvpId,
    Phone,
}

#[derive(DeriveIden)]
pub enum Messages {
    Table,
    Id,
    ChatId,
    IsAdmin,
    Message,
    Status,
    MessageSid,
    MessageType,
    FileUrl,
    IsRead,
}

#[derive(DeriveIden)]
pub enum EmailAccounts {
    Table,
    Id,
    UserId,
    Email,
    Encryption,
    ImapHost,
    ImapPort,
    Username,
    Password,
}

#[derive(DeriveIden)]
pub enum Projects {
    Table,
    Id,
    Title,
    DbName,
    DbUser,
    DbPassword,
    Port,
}

/// Raw `REFERENCES` clause for a column added to an existing table.
///
/// SQLite cannot add a named foreign key through `ALTER TABLE`, but both
/// SQLite and Postgres accept an inline column reference.
pub fn references(table: &str) -> String {
    format!("REFERENCES \"{table}\" (\"id\") ON DELETE CASCADE")
}
