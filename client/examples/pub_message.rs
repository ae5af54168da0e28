use aliyun_iot::{Client, Config, ParameterSet, Region};
use aliyun_iot_core::{Context, OsEnv, Result};
use aliyun_iot_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    let config = Config {
        region_id: Some(Region::CnShanghai),
        ..Default::default()
    }
    .from_env(&ctx);

    let client = Client::new(ctx, config)?;

    // The message body must be Base64 of the raw payload.
    let resp = client
        .pub_message(
            ParameterSet::new()
                .with("ProductKey", "a1b2c3d4")
                .with("TopicFullName", "/a1b2c3d4/device1/user/get")
                .with("MessageContent", "aGVsbG8gd29ybGQ=")
                .with("Qos", 0),
        )
        .await?;

    println!("status: {}", resp.status());
    println!("body: {}", String::from_utf8_lossy(resp.body()));

    Ok(())
}
