use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A charge raised against a student. Amounts are kept in cents.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "fees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The student's user id.
    pub student_id: i64,
    pub fee_type: FeeType,
    pub amount_cents: i64,
    pub due_date: NaiveDate,
    pub payment_status: PaymentStatus,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: String,
    pub transaction_id: String,
    pub remarks: String,
    pub academic_year: String,
    pub semester: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum FeeType {
    #[sea_orm(string_value = "tuition")]
    Tuition,
    #[sea_orm(string_value = "library")]
    Library,
    #[sea_orm(string_value = "lab")]
    Lab,
    #[sea_orm(string_value = "exam")]
    Exam,
    #[sea_orm(string_value = "development")]
    Development,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "paid")]
    Paid,
    #[sea_orm(string_value = "overdue")]
    Overdue,
    #[sea_orm(string_value = "partial")]
    Partial,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Converts a money amount to whole cents. Rejects negatives and amounts
/// with more than two decimal places.
pub fn to_cents(amount: Decimal) -> Result<i64, DbErr> {
    if amount.is_sign_negative() {
        return Err(DbErr::Custom("Amount cannot be negative".into()));
    }
    let cents = amount * Decimal::ONE_HUNDRED;
    if cents.fract() != Decimal::ZERO {
        return Err(DbErr::Custom("Amount has more than two decimal places".into()));
    }
    cents
        .to_i64()
        .ok_or_else(|| DbErr::Custom("Amount out of range".into()))
}

/// Overdue means past due and not paid. Evaluated against `today`.
pub fn is_overdue(due_date: NaiveDate, status: PaymentStatus, today: NaiveDate) -> bool {
    due_date < today && status != PaymentStatus::Paid
}

/// Input for [`Model::create`].
#[derive(Debug, Clone)]
pub struct NewFee {
    pub student_id: i64,
    pub fee_type: FeeType,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub academic_year: String,
    pub semester: i32,
    pub remarks: String,
}

/// Payment fields an administrator may change on a fee. `None` leaves the
/// field as it is.
#[derive(Debug, Clone, Default)]
pub struct PaymentUpdate {
    pub payment_status: Option<PaymentStatus>,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub remarks: Option<String>,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(db: &C, new: NewFee) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            student_id: Set(new.student_id),
            fee_type: Set(new.fee_type),
            amount_cents: Set(to_cents(new.amount)?),
            due_date: Set(new.due_date),
            payment_status: Set(PaymentStatus::Pending),
            payment_date: Set(None),
            payment_method: Set(String::new()),
            transaction_id: Set(String::new()),
            remarks: Set(new.remarks),
            academic_year: Set(new.academic_year),
            semester: Set(new.semester),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub fn amount(&self) -> Decimal {
        Decimal::new(self.amount_cents, 2)
    }

    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        is_overdue(self.due_date, self.payment_status, today)
    }

    pub fn is_overdue(&self) -> bool {
        self.is_overdue_on(Utc::now().date_naive())
    }

    /// Still owed: status pending or overdue.
    pub fn is_pending(&self) -> bool {
        matches!(
            self.payment_status,
            PaymentStatus::Pending | PaymentStatus::Overdue
        )
    }

    /// All fees of a student, newest first.
    pub async fn for_student<C: ConnectionTrait>(
        db: &C,
        student_user_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }

    /// Pending or overdue fees of a student, earliest due first.
    pub async fn pending_for_student<C: ConnectionTrait>(
        db: &C,
        student_user_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_user_id))
            .filter(Column::PaymentStatus.is_in([PaymentStatus::Pending, PaymentStatus::Overdue]))
            .order_by_asc(Column::DueDate)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn update_payment<C: ConnectionTrait>(
        db: &C,
        id: i64,
        update: PaymentUpdate,
    ) -> Result<Model, DbErr> {
        let fee = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Fee {id} not found")))?;

        let mut active: ActiveModel = fee.into();
        if let Some(status) = update.payment_status {
            active.payment_status = Set(status);
        }
        if let Some(date) = update.payment_date {
            active.payment_date = Set(Some(date));
        }
        if let Some(method) = update.payment_method {
            active.payment_method = Set(method);
        }
        if let Some(txn) = update.transaction_id {
            active.transaction_id = Set(txn);
        }
        if let Some(remarks) = update.remarks {
            active.remarks = Set(remarks);
        }
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    /// Sets the payment status of many fees at once. Returns rows touched.
    pub async fn set_status_bulk<C: ConnectionTrait>(
        db: &C,
        ids: &[i64],
        status: PaymentStatus,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }
        let res = Entity::update_many()
            .col_expr(Column::PaymentStatus, Expr::value(status.to_string()))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.is_in(ids.iter().copied()))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}

/// Sum of amounts.
pub fn total_amount<'a>(fees: impl IntoIterator<Item = &'a Model>) -> Decimal {
    fees.into_iter().map(Model::amount).sum()
}
