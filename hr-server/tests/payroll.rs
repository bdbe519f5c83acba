mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn calculate_uses_stored_salary() {
    let app = TestApp::new().await;
    let token = app.token().await;
    let emp = app.employee(&token, "Ada", "Engineering", 5000.0).await;

    let (status, body) = app
        .post(
            "/api/payroll/calculate",
            &token,
            json!({
                "employeeId": emp,
                "month": 3,
                "year": 2024,
                "basicSalary": 999999,
                "allowances": 500.25,
                "deductions": 200.10,
                "paymentMethod": "check"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["basicSalary"], 5000.0);
    assert_eq!(body["netSalary"], 5300.15);
    assert_eq!(body["status"], "processed");
    assert_eq!(body["paymentMethod"], "check");

    let (status, body) = app
        .post(
            "/api/payroll/calculate",
            &token,
            json!({"employeeId": emp, "month": 4, "year": 2024}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["netSalary"], 5000.0);
    assert_eq!(body["paymentMethod"], "bank_transfer");
}

#[tokio::test]
async fn duplicate_period_is_rejected_with_one_row_left() {
    let app = TestApp::new().await;
    let token = app.token().await;
    let emp = app.employee(&token, "Ada", "Engineering", 5000.0).await;
    let run = json!({"employeeId": emp, "month": 1, "year": 2024});

    let (status, _) = app.post("/api/payroll/calculate", &token, run.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = app.post("/api/payroll/calculate", &token, run).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5002);

    let (_, history) = app.get("/api/payroll/history", &token).await;
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["employeeFirstName"], "Ada");
    assert_eq!(history[0]["processedByUsername"], "hradmin");
}

#[tokio::test]
async fn calculate_validates_input() {
    let app = TestApp::new().await;
    let token = app.token().await;
    let emp = app.employee(&token, "Ada", "Engineering", 5000.0).await;

    for (body, code) in [
        (json!({"employeeId": emp, "month": 13, "year": 2024}), 5003),
        (json!({"employeeId": emp, "month": 1, "year": 1999}), 5003),
        (json!({"employeeId": emp, "month": 1, "year": 2024, "allowances": -1}), 5004),
    ] {
        let (status, resp) = app.post("/api/payroll/calculate", &token, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["code"], code);
    }

    let (status, _) = app
        .post(
            "/api/payroll/calculate",
            &token,
            json!({"employeeId": 9999, "month": 1, "year": 2024}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, history) = app.get("/api/payroll/history", &token).await;
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn out_of_range_net_salary_is_rejected() {
    let app = TestApp::new().await;
    let token = app.token().await;
    let emp = app.employee(&token, "Croesus", "Treasury", 7.0e28).await;

    let (status, body) = app
        .post(
            "/api/payroll/calculate",
            &token,
            json!({"employeeId": emp, "month": 1, "year": 2024, "allowances": 7.0e28}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5004);
    assert!(body["message"].is_string());

    let (_, history) = app.get("/api/payroll/history", &token).await;
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn reports() {
    let app = TestApp::new().await;
    let token = app.token().await;
    let ada = app.employee(&token, "Ada", "Engineering", 5000.0).await;
    let alan = app.employee(&token, "Alan", "Research", 3000.0).await;

    for (emp, month, year) in [(ada, 12, 2023), (ada, 1, 2024), (alan, 1, 2024)] {
        let (status, _) = app
            .post(
                "/api/payroll/calculate",
                &token,
                json!({"employeeId": emp, "month": month, "year": year}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, monthly) = app.get("/api/payroll/stats/monthly?year=2024", &token).await;
    assert_eq!(monthly.as_array().unwrap().len(), 1);
    assert_eq!(monthly[0]["totalNet"], 8000.0);
    assert_eq!(monthly[0]["employeeCount"], 2);

    let (_, monthly) = app.get("/api/payroll/stats/monthly", &token).await;
    assert_eq!(monthly.as_array().unwrap().len(), 2);

    let (_, yearly) = app.get("/api/payroll/stats/yearly", &token).await;
    assert_eq!(yearly[0]["year"], 2023);
    assert_eq!(yearly[1]["payrollCount"], 2);

    let (_, depts) = app.get("/api/payroll/stats/department", &token).await;
    let eng = depts
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["department"] == "Engineering")
        .unwrap();
    assert_eq!(eng["payrollCount"], 2);
    assert_eq!(eng["averageNetSalary"], 5000.0);

    let (_, mine) = app.get(&format!("/api/payroll/employee/{alan}"), &token).await;
    assert_eq!(mine.as_array().unwrap().len(), 1);

    // six zero-filled months ending now; the 2023/2024 runs fall outside
    let (status, trends) = app.get("/api/payroll/trends", &token).await;
    assert_eq!(status, StatusCode::OK);
    let trends = trends.as_array().unwrap();
    assert_eq!(trends.len(), 6);
}
