use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 人员 × 学期 的角色表（授课、助教、选课）
const MEMBERSHIP_TABLES: [&str; 3] = ["instructions", "teaching_assistings", "enrollings"];

/// 课程单元 / 作业 与资料的多对多关联表
/// (表名, 所属列, 所属表, 资料列, 资料表)
const LINK_TABLES: [(&str, &str, &str, &str, &str); 4] = [
    ("session_files", "session_id", "sessions", "file_material_id", "file_materials"),
    ("session_urls", "session_id", "sessions", "url_material_id", "url_materials"),
    ("assignment_files", "assignment_id", "assignments", "file_material_id", "file_materials"),
    ("assignment_urls", "assignment_id", "assignments", "url_material_id", "url_materials"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表（由外部认证系统维护）
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::FirstName).string().not_null().default(""))
                    .col(ColumnDef::new(Users::LastName).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Users::IsSuperuser)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学期表
        manager
            .create_table(
                Table::create()
                    .table(Semesters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Semesters::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Semesters::Year).integer().not_null())
                    .col(ColumnDef::new(Semesters::Term).integer().not_null())
                    .col(ColumnDef::new(Semesters::Title).string().not_null())
                    .col(ColumnDef::new(Semesters::Subtitle).text().not_null())
                    .col(ColumnDef::new(Semesters::Description).text().not_null())
                    .col(ColumnDef::new(Semesters::Syllabus).string().null())
                    .to_owned(),
            )
            .await?;

        // 创建人员表，主键即用户 ID（一对一）
        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Persons::UserId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Persons::EmployeeId).big_integer().not_null())
                    .col(ColumnDef::new(Persons::AcademicEmail).string().not_null())
                    .col(ColumnDef::new(Persons::GithubUrl).string().null())
                    .col(ColumnDef::new(Persons::LinkedinUrl).string().null())
                    .col(ColumnDef::new(Persons::Image).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Persons::Table, Persons::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建授课 / 助教 / 选课表
        for table in MEMBERSHIP_TABLES {
            create_membership_table(manager, table).await?;
        }

        // 创建文件资料表
        manager
            .create_table(
                Table::create()
                    .table(FileMaterials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FileMaterials::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FileMaterials::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(FileMaterials::Title).string_len(100).not_null())
                    .col(
                        ColumnDef::new(FileMaterials::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(FileMaterials::File).string().not_null())
                    .col(
                        ColumnDef::new(FileMaterials::SemesterId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FileMaterials::AccessControl)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FileMaterials::Table, FileMaterials::SemesterId)
                            .to(Semesters::Table, Semesters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建链接资料表
        manager
            .create_table(
                Table::create()
                    .table(UrlMaterials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UrlMaterials::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UrlMaterials::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UrlMaterials::Title).string_len(100).not_null())
                    .col(
                        ColumnDef::new(UrlMaterials::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(UrlMaterials::Url).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程单元表
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sessions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sessions::SemesterId).big_integer().not_null())
                    .col(ColumnDef::new(Sessions::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Sessions::Subtitle).text().not_null())
                    .col(ColumnDef::new(Sessions::Description).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sessions::Table, Sessions::SemesterId)
                            .to(Semesters::Table, Semesters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业表，题目与答案文件受 RESTRICT 保护
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assignments::SemesterId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Assignments::Subtitle).text().not_null())
                    .col(ColumnDef::new(Assignments::Description).text().not_null())
                    .col(
                        ColumnDef::new(Assignments::QuestionsId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::SolutionsId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::SemesterId)
                            .to(Semesters::Table, Semesters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::QuestionsId)
                            .to(FileMaterials::Table, FileMaterials::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::SolutionsId)
                            .to(FileMaterials::Table, FileMaterials::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建资料关联表
        for (table, owner_col, owner_table, target_col, target_table) in LINK_TABLES {
            create_link_table(manager, table, owner_col, owner_table, target_col, target_table)
                .await?;
        }

        // 创建提交表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Submissions::PersonId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Submissions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::Delay).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::PersonId)
                            .to(Persons::Table, Persons::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建题目表
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Questions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Questions::QuestionIdentifier)
                            .string_len(100)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Questions::Table, Questions::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩表
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grades::PersonId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::QuestionId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::Grade).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::PersonId)
                            .to(Persons::Table, Persons::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩申诉表
        // 不声明唯一约束，见 DESIGN.md
        manager
            .create_table(
                Table::create()
                    .table(Objections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Objections::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Objections::State)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Objections::GradeId).big_integer().not_null())
                    .col(ColumnDef::new(Objections::CurrentGrade).integer().not_null())
                    .col(ColumnDef::new(Objections::ObjectionText).text().not_null())
                    .col(
                        ColumnDef::new(Objections::ResponseText)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Objections::Table, Objections::GradeId)
                            .to(Grades::Table, Grades::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 学期 (year, term) 唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_semesters_year_term")
                    .table(Semesters::Table)
                    .col(Semesters::Year)
                    .col(Semesters::Term)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 提交 (person, assignment) 唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_submissions_person_assignment")
                    .table(Submissions::Table)
                    .col(Submissions::PersonId)
                    .col(Submissions::AssignmentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 成绩 (person, question) 唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_grades_person_question")
                    .table(Grades::Table)
                    .col(Grades::PersonId)
                    .col(Grades::QuestionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_file_materials_semester_id")
                    .table(FileMaterials::Table)
                    .col(FileMaterials::SemesterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_questions_assignment_id")
                    .table(Questions::Table)
                    .col(Questions::AssignmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_objections_grade_id")
                    .table(Objections::Table)
                    .col(Objections::GradeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Objections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        for (table, ..) in LINK_TABLES.iter().rev() {
            manager
                .drop_table(Table::drop().table(Alias::new(*table)).to_owned())
                .await?;
        }
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UrlMaterials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FileMaterials::Table).to_owned())
            .await?;
        for table in MEMBERSHIP_TABLES.iter().rev() {
            manager
                .drop_table(Table::drop().table(Alias::new(*table)).to_owned())
                .await?;
        }
        manager
            .drop_table(Table::drop().table(Persons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Semesters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

/// 创建 人员 × 学期 角色表，(person_id, semester_id) 唯一
async fn create_membership_table(manager: &SchemaManager<'_>, table: &'static str) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(Alias::new(table))
                .if_not_exists()
                .col(
                    ColumnDef::new(Memberships::Id)
                        .big_integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Memberships::PersonId).big_integer().not_null())
                .col(ColumnDef::new(Memberships::SemesterId).big_integer().not_null())
                .col(ColumnDef::new(Memberships::Description).text().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .from(Alias::new(table), Memberships::PersonId)
                        .to(Persons::Table, Persons::UserId)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .from(Alias::new(table), Memberships::SemesterId)
                        .to(Semesters::Table, Semesters::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .if_not_exists()
                .name(format!("uq_{table}_person_semester"))
                .table(Alias::new(table))
                .col(Memberships::PersonId)
                .col(Memberships::SemesterId)
                .unique()
                .to_owned(),
        )
        .await
}

/// 创建多对多关联表，两端均级联删除
async fn create_link_table(
    manager: &SchemaManager<'_>,
    table: &'static str,
    owner_col: &'static str,
    owner_table: &'static str,
    target_col: &'static str,
    target_table: &'static str,
) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(Alias::new(table))
                .if_not_exists()
                .col(
                    ColumnDef::new(Alias::new("id"))
                        .big_integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Alias::new(owner_col)).big_integer().not_null())
                .col(ColumnDef::new(Alias::new(target_col)).big_integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .from(Alias::new(table), Alias::new(owner_col))
                        .to(Alias::new(owner_table), Alias::new("id"))
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .from(Alias::new(table), Alias::new(target_col))
                        .to(Alias::new(target_table), Alias::new("id"))
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .if_not_exists()
                .name(format!("uq_{table}_{owner_col}_{target_col}"))
                .table(Alias::new(table))
                .col(Alias::new(owner_col))
                .col(Alias::new(target_col))
                .unique()
                .to_owned(),
        )
        .await
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    FirstName,
    LastName,
    IsSuperuser,
}

#[derive(DeriveIden)]
enum Semesters {
    #[sea_orm(iden = "semesters")]
    Table,
    Id,
    Year,
    Term,
    Title,
    Subtitle,
    Description,
    Syllabus,
}

#[derive(DeriveIden)]
enum Persons {
    #[sea_orm(iden = "persons")]
    Table,
    UserId,
    EmployeeId,
    AcademicEmail,
    GithubUrl,
    LinkedinUrl,
    Image,
}

#[derive(DeriveIden)]
enum Memberships {
    Id,
    PersonId,
    SemesterId,
    Description,
}

#[derive(DeriveIden)]
enum FileMaterials {
    #[sea_orm(iden = "file_materials")]
    Table,
    Id,
    Name,
    Title,
    Description,
    File,
    SemesterId,
    AccessControl,
}

#[derive(DeriveIden)]
enum UrlMaterials {
    #[sea_orm(iden = "url_materials")]
    Table,
    Id,
    Name,
    Title,
    Description,
    Url,
}

#[derive(DeriveIden)]
enum Sessions {
    #[sea_orm(iden = "sessions")]
    Table,
    Id,
    SemesterId,
    Title,
    Subtitle,
    Description,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    SemesterId,
    Title,
    Subtitle,
    Description,
    QuestionsId,
    SolutionsId,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    PersonId,
    AssignmentId,
    Delay,
}

#[derive(DeriveIden)]
enum Questions {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    AssignmentId,
    QuestionIdentifier,
}

#[derive(DeriveIden)]
enum Grades {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    PersonId,
    QuestionId,
    Grade,
}

#[derive(DeriveIden)]
enum Objections {
    #[sea_orm(iden = "objections")]
    Table,
    Id,
    State,
    GradeId,
    CurrentGrade,
    ObjectionText,
    ResponseText,
}
