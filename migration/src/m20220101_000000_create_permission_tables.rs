use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Named capabilities, grouped for display by `value`
        let table = timestamps(Table::create().table(Permissions::Table).to_owned())
            .col(pk_auto(Permissions::Id))
            .col(string(Permissions::Name))
            .col(string(Permissions::GuardName).default("web"))
            .col(string_null(Permissions::Value))
            .to_owned();
        manager.create_table(table).await?;

        manager
            .create_index(
                Index::create()
                    .name("permissions_name_guard_name_unique")
                    .table(Permissions::Table)
                    .col(Permissions::Name)
                    .col(Permissions::GuardName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        let table = timestamps(Table::create().table(Roles::Table).to_owned())
            .col(pk_auto(Roles::Id))
            .col(string(Roles::Name))
            .col(string(Roles::GuardName).default("web"))
            .to_owned();
        manager.create_table(table).await?;

        manager
            .create_index(
                Index::create()
                    .name("roles_name_guard_name_unique")
                    .table(Roles::Table)
                    .col(Roles::Name)
                    .col(Roles::GuardName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Direct grants to any model (users in practice)
        let table = Table::create()
            .table(ModelHasPermissions::Table)
            .col(integer(ModelHasPermissions::PermissionId))
            .col(string(ModelHasPermissions::ModelType))
            .col(integer(ModelHasPermissions::ModelId))
            .primary_key(
                Index::create()
                    .col(ModelHasPermissions::PermissionId)
                    .col(ModelHasPermissions::ModelId)
                    .col(ModelHasPermissions::ModelType),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_model_has_permissions_permission")
                    .from(ModelHasPermissions::Table, ModelHasPermissions::PermissionId)
                    .to(Permissions::Table, Permissions::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        let table = Table::create()
            .table(ModelHasRoles::Table)
            .col(integer(ModelHasRoles::RoleId))
            .col(string(ModelHasRoles::ModelType))
            .col(integer(ModelHasRoles::ModelId))
            .primary_key(
                Index::create()
                    .col(ModelHasRoles::RoleId)
                    .col(ModelHasRoles::ModelId)
                    .col(ModelHasRoles::ModelType),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_model_has_roles_role")
                    .from(ModelHasRoles::Table, ModelHasRoles::RoleId)
                    .to(Roles::Table, Roles::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        let table = Table::create()
            .table(RoleHasPermissions::Table)
            .col(integer(RoleHasPermissions::PermissionId))
            .col(integer(RoleHasPermissions::RoleId))
            .primary_key(
                Index::create()
                    .col(RoleHasPermissions::PermissionId)
                    .col(RoleHasPermissions::RoleId),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_role_has_permissions_permission")
                    .from(RoleHasPermissions::Table, RoleHasPermissions::PermissionId)
                    .to(Permissions::Table, Permissions::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_role_has_permissions_role")
                    .from(RoleHasPermissions::Table, RoleHasPermissions::RoleId)
                    .to(Roles::Table, Roles::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_model_has_roles_model")
                    .table(ModelHasRoles::Table)
                    .col(ModelHasRoles::ModelId)
                    .col(ModelHasRoles::ModelType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop all tables in reverse order to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(RoleHasPermissions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ModelHasRoles::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ModelHasPermissions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Permissions::Table).to_owned())
            .await?;

        Ok(())
    }
}
