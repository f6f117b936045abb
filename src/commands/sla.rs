use crate::client::DashboardClient;
use crate::config::get_api_base_url;
use crate::error::DashboardResult;
use crate::formatting::print_sla_feed;

pub async fn handle_sla() -> DashboardResult<()> {
    let client = DashboardClient::new(get_api_base_url());
    let timers = client.fetch_sla_timers().await?;
    print_sla_feed(&timers);
    Ok(())
}
