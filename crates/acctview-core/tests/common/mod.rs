use acctview_core::model::{
    ApiLog, ApiLogStatus, HttpMethod, Member, OrderListItem, OrderStatus, OrderType, PaymentStatus,
    TeamRole, UserStatus,
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};

/// Build an order with deterministic fields derived from `n`
#[allow(dead_code)]
pub fn order(n: usize, status: OrderStatus, total: f64) -> OrderListItem {
    let created = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap() + Duration::hours(n as i64);
    OrderListItem {
        id: format!("ord_{:03}", n),
        display_id: format!("ORD-2025-{:04}", n),
        status,
        order_type: if n % 2 == 0 {
            OrderType::Photo
        } else {
            OrderType::Video
        },
        client_name: format!("Client {}", n),
        session_date: if n % 5 == 0 {
            None
        } else {
            NaiveDate::from_ymd_opt(2025, 2, (n % 28) as u32 + 1)
        },
        location: None,
        payment_status: PaymentStatus::Paid,
        total,
        currency: "EUR".to_string(),
        created_at: created,
        created_by: "user_1".to_string(),
    }
}

/// Twenty orders, exactly three of them confirmed, totals not pre-sorted
#[allow(dead_code)]
pub fn twenty_orders() -> Vec<OrderListItem> {
    let totals = [
        300.0, 1200.0, 500.0, 950.0, 75.0, 2200.0, 640.0, 410.0, 1800.0, 990.0, 120.0, 3300.0,
        560.0, 780.0, 45.0, 1500.0, 860.0, 230.0, 1100.0, 670.0,
    ];
    totals
        .iter()
        .enumerate()
        .map(|(n, total)| {
            let status = match n {
                2 | 9 | 17 => OrderStatus::Confirmed,
                n if n % 3 == 0 => OrderStatus::Scheduled,
                _ => OrderStatus::Completed,
            };
            order(n, status, *total)
        })
        .collect()
}

#[allow(dead_code)]
pub fn api_log(n: usize, method: HttpMethod, status_code: u16) -> ApiLog {
    ApiLog {
        id: format!("log_{:03}", n),
        api_key_id: if n % 2 == 0 { "key_live" } else { "key_test" }.to_string(),
        api_key_name: "Production".to_string(),
        method,
        endpoint: format!("/v1/orders/{}", n),
        status_code,
        status: ApiLogStatus::from_status_code(status_code),
        response_time: 100 + n as u32,
        timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap() + Duration::days(n as i64),
        ip_address: None,
        error_message: None,
    }
}

#[allow(dead_code)]
pub fn member(name: &str, email: &str, role: TeamRole) -> Member {
    Member {
        id: format!("mem_{}", name.to_lowercase()),
        name: name.to_string(),
        email: email.to_string(),
        role,
        custom_role_name: None,
        status: UserStatus::Active,
        joined_at: "Mar 2024".to_string(),
        last_active_at: None,
        two_factor_enabled: false,
        active_sessions: 0,
        assets_created: 0,
    }
}
