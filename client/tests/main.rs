use std::env;

use aliyun_iot::{Client, Config, ParameterSet, Profile, Region};
use aliyun_iot_core::{Context, OsEnv, Result};
use aliyun_iot_http_send_reqwest::ReqwestHttpSend;
use log::{debug, warn};

fn init_client(profile: Profile) -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("ALIYUN_IOT_TEST").is_err() || env::var("ALIYUN_IOT_TEST").unwrap() != "on" {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    let region = env::var("ALIYUN_IOT_REGION_ID")
        .expect("env ALIYUN_IOT_REGION_ID must set")
        .parse::<Region>()
        .expect("region id must be supported");

    let config = Config {
        region_id: Some(region),
        profile,
        ..Default::default()
    }
    .from_env(&ctx);

    Some(Client::new(ctx, config).expect("client must build"))
}

#[tokio::test]
async fn test_query_product_list() -> Result<()> {
    let Some(client) = init_client(Profile::PostForm) else {
        warn!("ALIYUN_IOT_TEST is not set, skipped");
        return Ok(());
    };

    let resp = client
        .query_product_list(
            ParameterSet::new()
                .with("PageSize", 10)
                .with("CurrentPage", 1),
        )
        .await?;

    debug!("got response: {:?}", resp);
    assert!(resp.status().is_success());
    Ok(())
}

#[tokio::test]
async fn test_query_product_list_via_get_query() -> Result<()> {
    let Some(client) = init_client(Profile::GetQuery) else {
        warn!("ALIYUN_IOT_TEST is not set, skipped");
        return Ok(());
    };

    let resp = client
        .query_product_list(
            ParameterSet::new()
                .with("PageSize", 10)
                .with("CurrentPage", 1),
        )
        .await?;

    debug!("got response: {:?}", resp);
    assert!(resp.status().is_success());
    Ok(())
}

#[tokio::test]
async fn test_bad_secret_surfaces_as_failed_response() -> Result<()> {
    if init_client(Profile::PostForm).is_none() {
        warn!("ALIYUN_IOT_TEST is not set, skipped");
        return Ok(());
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    let region = env::var("ALIYUN_IOT_REGION_ID")
        .expect("env ALIYUN_IOT_REGION_ID must set")
        .parse::<Region>()
        .expect("region id must be supported");

    let config = Config {
        access_key_id: Some("LTAIbogusbogusbo".to_string()),
        access_key_secret: Some("definitely-not-the-secret".to_string()),
        region_id: Some(region),
        ..Default::default()
    };
    let client = Client::new(ctx, config).expect("client must build");

    // Authentication failures come back as an ordinary failed response,
    // never as a client-side error.
    let resp = client.query_product_list(ParameterSet::new()).await?;

    debug!("got response: {:?}", resp);
    assert!(resp.status().is_client_error());
    Ok(())
}
