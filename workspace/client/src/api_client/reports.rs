use common::{PaginatedResponse, ReportDetail, ReportSummary};

use super::{segment, ApiClient, API_PREFIX};
use crate::error::Result;

/// Get all generated reports
pub async fn get_reports(client: &ApiClient) -> Result<PaginatedResponse<ReportSummary>> {
    log::trace!("Fetching all reports");
    let endpoint = format!("{}/reports", API_PREFIX);
    let result: Result<PaginatedResponse<ReportSummary>> = client.get(&endpoint, &[]).await;

    match &result {
        Ok(page) => log::info!("Successfully fetched {} reports", page.items.len()),
        Err(e) => log::error!("Failed to fetch reports: {}", e),
    }

    result
}

/// Get a single report with highlights and notes
pub async fn get_report_detail(client: &ApiClient, report_id: &str) -> Result<ReportDetail> {
    log::trace!("Fetching report detail for ID: {}", report_id);
    let endpoint = format!("{}/reports/{}", API_PREFIX, segment(report_id));
    let result: Result<ReportDetail> = client.get(&endpoint, &[]).await;

    match &result {
        Ok(_) => log::info!("Successfully fetched report {}", report_id),
        Err(e) => log::error!("Failed to fetch report {}: {}", report_id, e),
    }

    result
}
