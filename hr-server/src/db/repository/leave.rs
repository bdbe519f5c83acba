//! Leave Request Repository

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{LeaveRequest, LeaveRequestDetail, LeaveStatus, LeaveTaker, LeaveType};
use shared::util::now_millis;
use sqlx::SqlitePool;

const LEAVE_SELECT: &str = "SELECT id, employee_id, leave_type, start_date, end_date, days, reason, status, approved_by, approval_date, approval_comments, created_at, updated_at FROM leave_request";

const DETAIL_SELECT: &str = "SELECT l.id, l.employee_id, l.leave_type, l.start_date, l.end_date, l.days, l.reason, l.status, \
     l.approved_by, l.approval_date, l.approval_comments, l.created_at, l.updated_at, \
     e.first_name AS employee_first_name, e.last_name AS employee_last_name, \
     e.department AS employee_department, u.username AS approver_username \
     FROM leave_request l \
     JOIN employee e ON e.id = l.employee_id \
     LEFT JOIN user u ON u.id = l.approved_by";

/// New application; always starts `pending`
pub struct NewLeave<'a> {
    pub employee_id: i64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub reason: &'a str,
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<LeaveRequest>> {
    let sql = format!("{LEAVE_SELECT} WHERE id = ?");
    let leave = sqlx::query_as::<_, LeaveRequest>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(leave)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM leave_request")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn create(pool: &SqlitePool, data: NewLeave<'_>) -> RepoResult<LeaveRequest> {
    let now = now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO leave_request (employee_id, leave_type, start_date, end_date, days, reason, status, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.employee_id)
    .bind(data.leave_type)
    .bind(data.start_date)
    .bind(data.end_date)
    .bind(data.days)
    .bind(data.reason)
    .bind(LeaveStatus::Pending)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create leave request".into()))
}

/// All requests, newest first, with employee and approver names
pub async fn find_all_detailed(pool: &SqlitePool) -> RepoResult<Vec<LeaveRequestDetail>> {
    let sql = format!("{DETAIL_SELECT} ORDER BY l.created_at DESC, l.id DESC");
    let leaves = sqlx::query_as::<_, LeaveRequestDetail>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(leaves)
}

pub async fn find_by_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> RepoResult<Vec<LeaveRequestDetail>> {
    let sql = format!("{DETAIL_SELECT} WHERE l.employee_id = ? ORDER BY l.created_at DESC, l.id DESC");
    let leaves = sqlx::query_as::<_, LeaveRequestDetail>(&sql)
        .bind(employee_id)
        .fetch_all(pool)
        .await?;
    Ok(leaves)
}

pub async fn find_detail(pool: &SqlitePool, id: i64) -> RepoResult<Option<LeaveRequestDetail>> {
    let sql = format!("{DETAIL_SELECT} WHERE l.id = ?");
    let leave = sqlx::query_as::<_, LeaveRequestDetail>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(leave)
}

/// Move a pending request to `status`
///
/// Returns `false` when the request is no longer pending (nothing written).
pub async fn resolve(
    pool: &SqlitePool,
    id: i64,
    status: LeaveStatus,
    approver_id: i64,
    comments: Option<&str>,
) -> RepoResult<bool> {
    let now = now_millis();
    let rows = sqlx::query(
        "UPDATE leave_request SET status = ?, approved_by = ?, approval_date = ?, \
         approval_comments = ?, updated_at = ? \
         WHERE id = ? AND status = 'pending'",
    )
    .bind(status)
    .bind(approver_id)
    .bind(now)
    .bind(comments)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Approved days per leave type for requests starting in `[from, to)`
pub async fn approved_days_by_type(
    pool: &SqlitePool,
    employee_id: i64,
    from: NaiveDate,
    to: NaiveDate,
) -> RepoResult<Vec<(LeaveType, i64)>> {
    let rows = sqlx::query_as::<_, (LeaveType, i64)>(
        "SELECT leave_type, SUM(days) FROM leave_request \
         WHERE employee_id = ? AND status = 'approved' AND start_date >= ? AND start_date < ? \
         GROUP BY leave_type",
    )
    .bind(employee_id)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Employees with the most approved days starting in `[from, to)`
pub async fn top_takers(
    pool: &SqlitePool,
    from: NaiveDate,
    to: NaiveDate,
    limit: i64,
) -> RepoResult<Vec<LeaveTaker>> {
    let rows = sqlx::query_as::<_, LeaveTaker>(
        "SELECT e.id, e.first_name, e.last_name, e.department, SUM(l.days) AS total_days \
         FROM leave_request l JOIN employee e ON e.id = l.employee_id \
         WHERE l.status = 'approved' AND l.start_date >= ? AND l.start_date < ? \
         GROUP BY e.id ORDER BY total_days DESC, e.id ASC LIMIT ?",
    )
    .bind(from)
    .bind(to)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Approved requests lying entirely within `[start, end]`, by start date
pub async fn approved_within(
    pool: &SqlitePool,
    start: NaiveDate,
    end: NaiveDate,
) -> RepoResult<Vec<LeaveRequestDetail>> {
    let sql = format!(
        "{DETAIL_SELECT} WHERE l.status = 'approved' AND l.start_date >= ? AND l.end_date <= ? \
         ORDER BY l.start_date, l.id"
    );
    let leaves = sqlx::query_as::<_, LeaveRequestDetail>(&sql)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;
    Ok(leaves)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn apply(
        pool: &SqlitePool,
        employee_id: i64,
        leave_type: LeaveType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> LeaveRequest {
        let days = (end - start).num_days() + 1;
        create(
            pool,
            NewLeave {
                employee_id,
                leave_type,
                start_date: start,
                end_date: end,
                days,
                reason: "family",
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_pending() {
        let pool = test_pool().await;
        let emp = insert_employee(&pool, "Ada", "Lovelace", "Eng", 1.0).await;
        let leave = apply(&pool, emp, LeaveType::Annual, date(2024, 1, 1), date(2024, 1, 5)).await;
        assert_eq!(leave.status, LeaveStatus::Pending);
        assert_eq!(leave.days, 5);
        assert!(leave.approved_by.is_none());
    }

    #[tokio::test]
    async fn test_unknown_employee_rejected_by_store() {
        let pool = test_pool().await;
        let err = create(
            &pool,
            NewLeave {
                employee_id: 404,
                leave_type: LeaveType::Sick,
                start_date: date(2024, 1, 1),
                end_date: date(2024, 1, 1),
                days: 1,
                reason: "flu",
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        assert_eq!(count(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_resolve_is_terminal() {
        let pool = test_pool().await;
        let user = insert_user(&pool, "boss").await;
        let emp = insert_employee(&pool, "Ada", "Lovelace", "Eng", 1.0).await;
        let leave = apply(&pool, emp, LeaveType::Sick, date(2024, 2, 1), date(2024, 2, 2)).await;

        assert!(resolve(&pool, leave.id, LeaveStatus::Approved, user, Some("ok")).await.unwrap());
        assert!(!resolve(&pool, leave.id, LeaveStatus::Rejected, user, None).await.unwrap());

        let stored = find_by_id(&pool, leave.id).await.unwrap().unwrap();
        assert_eq!(stored.status, LeaveStatus::Approved);
        assert_eq!(stored.approved_by, Some(user));
        assert_eq!(stored.approval_comments.as_deref(), Some("ok"));
        assert!(stored.approval_date.is_some());
        assert_eq!(stored.days, 2);

        let detail = find_detail(&pool, leave.id).await.unwrap().unwrap();
        assert_eq!(detail.approver_username.as_deref(), Some("boss"));
        assert_eq!(detail.employee_first_name, "Ada");
    }

    #[tokio::test]
    async fn test_approved_days_by_type_filters_year_and_status() {
        let pool = test_pool().await;
        let user = insert_user(&pool, "boss").await;
        let emp = insert_employee(&pool, "Ada", "Lovelace", "Eng", 1.0).await;

        let a = apply(&pool, emp, LeaveType::Annual, date(2024, 1, 1), date(2024, 1, 5)).await;
        let b = apply(&pool, emp, LeaveType::Annual, date(2024, 7, 1), date(2024, 7, 2)).await;
        let c = apply(&pool, emp, LeaveType::Sick, date(2023, 12, 30), date(2024, 1, 2)).await;
        apply(&pool, emp, LeaveType::Casual, date(2024, 3, 1), date(2024, 3, 1)).await;
        for id in [a.id, b.id, c.id] {
            resolve(&pool, id, LeaveStatus::Approved, user, None).await.unwrap();
        }

        let mut used = approved_days_by_type(&pool, emp, date(2024, 1, 1), date(2025, 1, 1))
            .await
            .unwrap();
        used.sort_by_key(|(t, _)| t.as_str());
        assert_eq!(used, vec![(LeaveType::Annual, 7)]);
    }

    #[tokio::test]
    async fn test_top_takers_and_calendar() {
        let pool = test_pool().await;
        let user = insert_user(&pool, "boss").await;
        let a = insert_employee(&pool, "Ada", "Lovelace", "Eng", 1.0).await;
        let b = insert_employee(&pool, "Alan", "Turing", "Research", 1.0).await;

        let l1 = apply(&pool, a, LeaveType::Annual, date(2024, 5, 1), date(2024, 5, 3)).await;
        let l2 = apply(&pool, b, LeaveType::Sick, date(2024, 5, 10), date(2024, 5, 19)).await;
        let pending = apply(&pool, a, LeaveType::Casual, date(2024, 5, 20), date(2024, 5, 20)).await;
        resolve(&pool, l1.id, LeaveStatus::Approved, user, None).await.unwrap();
        resolve(&pool, l2.id, LeaveStatus::Approved, user, None).await.unwrap();

        let top = top_takers(&pool, date(2024, 1, 1), date(2025, 1, 1), 5).await.unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, b);
        assert_eq!(top[0].total_days, 10);
        assert_eq!(top[1].first_name, "Ada");

        let events = approved_within(&pool, date(2024, 5, 1), date(2024, 5, 15)).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].leave.id, l1.id);
        assert!(events.iter().all(|e| e.leave.id != pending.id));
    }

    #[tokio::test]
    async fn test_lists_newest_first() {
        let pool = test_pool().await;
        let emp = insert_employee(&pool, "Ada", "Lovelace", "Eng", 1.0).await;
        let first = apply(&pool, emp, LeaveType::Sick, date(2024, 1, 1), date(2024, 1, 1)).await;
        let second = apply(&pool, emp, LeaveType::Sick, date(2024, 2, 1), date(2024, 2, 1)).await;

        let all = find_all_detailed(&pool).await.unwrap();
        assert_eq!(all[0].leave.id, second.id);
        assert_eq!(all[1].leave.id, first.id);

        let mine = find_by_employee(&pool, emp).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(find_by_employee(&pool, 999).await.unwrap().is_empty());
    }
}
