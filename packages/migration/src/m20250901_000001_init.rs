use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Games {
    Table,
    Id,
    InitialDealerId,
    AdminId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    GameId,
    Name,
    UserId,
    CreatedAt,
}

#[derive(Iden)]
enum Hands {
    Table,
    Id,
    GameId,
    HandNumber,
    DealerPlayerId,
    CreatedAt,
}

#[derive(Iden)]
enum HandScores {
    Table,
    Id,
    HandId,
    PlayerId,
    Score,
    CreatedAt,
}

#[derive(Iden)]
enum PlayerClaims {
    Table,
    Id,
    PlayerId,
    UserId,
    ClaimedAt,
}

#[derive(Iden)]
enum UserGameStats {
    Table,
    Id,
    UserId,
    GameId,
    PlayerId,
    TotalScore,
    HandsPlayed,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum UserStats {
    Table,
    UserId,
    TotalGames,
    TotalHandsPlayed,
    BestScore,
    WorstScore,
    AverageScore,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // games
        // initial_dealer_id has no FK: players reference games, so the
        // dealer link is enforced by the service layer instead.
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::InitialDealerId).big_integer().null())
                    .col(ColumnDef::new(Games::AdminId).string().null())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::GameId).string_len(64).not_null())
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(ColumnDef::new(Players::UserId).string().null())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_game_id")
                            .from(Players::Table, Players::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_players_game_id")
                    .table(Players::Table)
                    .col(Players::GameId)
                    .to_owned(),
            )
            .await?;

        // hands
        manager
            .create_table(
                Table::create()
                    .table(Hands::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hands::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Hands::GameId).string_len(64).not_null())
                    .col(ColumnDef::new(Hands::HandNumber).integer().not_null())
                    .col(ColumnDef::new(Hands::DealerPlayerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Hands::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hands_game_id")
                            .from(Hands::Table, Hands::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hands_dealer_player_id")
                            .from(Hands::Table, Hands::DealerPlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // one hand number per game; a concurrent next-number race fails here
        manager
            .create_index(
                Index::create()
                    .name("ux_hands_game_hand_number")
                    .table(Hands::Table)
                    .col(Hands::GameId)
                    .col(Hands::HandNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // hand_scores
        manager
            .create_table(
                Table::create()
                    .table(HandScores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HandScores::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(HandScores::HandId).big_integer().not_null())
                    .col(ColumnDef::new(HandScores::PlayerId).big_integer().not_null())
                    .col(ColumnDef::new(HandScores::Score).integer().not_null())
                    .col(
                        ColumnDef::new(HandScores::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hand_scores_hand_id")
                            .from(HandScores::Table, HandScores::HandId)
                            .to(Hands::Table, Hands::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hand_scores_player_id")
                            .from(HandScores::Table, HandScores::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_hand_scores_hand_player")
                    .table(HandScores::Table)
                    .col(HandScores::HandId)
                    .col(HandScores::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_hand_scores_player_id")
                    .table(HandScores::Table)
                    .col(HandScores::PlayerId)
                    .to_owned(),
            )
            .await?;

        // player_claims
        manager
            .create_table(
                Table::create()
                    .table(PlayerClaims::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlayerClaims::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(PlayerClaims::PlayerId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PlayerClaims::UserId).string().not_null())
                    .col(
                        ColumnDef::new(PlayerClaims::ClaimedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_claims_player_id")
                            .from(PlayerClaims::Table, PlayerClaims::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_player_claims_user_id")
                    .table(PlayerClaims::Table)
                    .col(PlayerClaims::UserId)
                    .to_owned(),
            )
            .await?;

        // user_game_stats
        manager
            .create_table(
                Table::create()
                    .table(UserGameStats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserGameStats::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(UserGameStats::UserId).string().not_null())
                    .col(ColumnDef::new(UserGameStats::GameId).string_len(64).not_null())
                    .col(ColumnDef::new(UserGameStats::PlayerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(UserGameStats::TotalScore)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserGameStats::HandsPlayed)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserGameStats::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserGameStats::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_game_stats_game_id")
                            .from(UserGameStats::Table, UserGameStats::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_game_stats_player_id")
                            .from(UserGameStats::Table, UserGameStats::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_user_game_stats_user_game")
                    .table(UserGameStats::Table)
                    .col(UserGameStats::UserId)
                    .col(UserGameStats::GameId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // user_stats
        manager
            .create_table(
                Table::create()
                    .table(UserStats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserStats::UserId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserStats::TotalGames)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserStats::TotalHandsPlayed)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(UserStats::BestScore).big_integer().null())
                    .col(ColumnDef::new(UserStats::WorstScore).big_integer().null())
                    .col(ColumnDef::new(UserStats::AverageScore).double().null())
                    .col(
                        ColumnDef::new(UserStats::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserStats::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order; indexes go with their tables
        manager
            .drop_table(Table::drop().table(UserStats::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserGameStats::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerClaims::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(HandScores::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Hands::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;

        Ok(())
    }
}
