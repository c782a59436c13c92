//! Reserve service demo binary
//!
//! Runs one operation against the endpoint in `MVTK_RESERVE_ENDPOINT` and
//! prints the typed result as JSON.
//!
//! ```text
//! reserve-cli auth   # purchase number authentication
//! reserve-cli seat   # seat reservation sync
//! reserve-cli cancel # seat reservation cancel
//! ```

use mvtk_reserve::{
    DeleteFlag, InformationTypeCode, KnshInfo, KnyknrNoInfo, KnyknrNoInfoIn,
    PurchaseNumberAuthIn, ReserveConfig, ReserveDeviceType, ReserveError, SeatInfoSyncIn, ZskInfo,
    purchase_number_auth, seat_info_sync,
};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PURCHASE_NUMBER: &str = "3472695908";
const PIN: &str = "7648";

fn auth_args() -> PurchaseNumberAuthIn {
    PurchaseNumberAuthIn {
        kgygish_cd: "SSK000".to_string(),
        jhshbts_cd: InformationTypeCode::All,
        knyknr_no_info_in: vec![KnyknrNoInfoIn {
            knyknr_no: PURCHASE_NUMBER.to_string(),
            pin_cd: PIN.to_string(),
        }],
        skhn_cd: "1622100".to_string(),
        st_cd: "18".to_string(),
        jei_ymd: "2017/02/16".to_string(),
    }
}

fn seat_args(trksh_flg: DeleteFlag) -> SeatInfoSyncIn {
    SeatInfoSyncIn {
        kgygish_cd: "SSK000".to_string(),
        yyk_dvc_typ: ReserveDeviceType::EntertainerSitePc,
        trksh_flg,
        kgygish_sstm_zskyyk_no: "118124".to_string(),
        kgygish_usr_zskyyk_no: "124".to_string(),
        jei_dt: "2017/02/16 10:00:00".to_string(),
        kij_ymd: "2017/02/16".to_string(),
        st_cd: "18".to_string(),
        scren_cd: "10".to_string(),
        knyknr_no_info: vec![KnyknrNoInfo {
            knyknr_no: PURCHASE_NUMBER.to_string(),
            pin_cd: PIN.to_string(),
            knsh_info: vec![KnshInfo {
                knsh_typ: "01".to_string(),
                mi_num: 1,
            }],
        }],
        zsk_info: vec![ZskInfo {
            zsk_cd: "Ａ－２".to_string(),
        }],
        skhn_cd: "1622100".to_string(),
    }
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to serialize result: {e}");
            ExitCode::FAILURE
        }
    }
}

fn report(error: &ReserveError) -> ExitCode {
    match error.http_status() {
        Some(status) => tracing::error!(
            status,
            backend_status = error.backend_status(),
            "Reserve service rejected the request: {error}"
        ),
        None => tracing::error!("Reserve service call failed: {error}"),
    }
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reserve_cli=info,mvtk_reserve=debug,mvtk_soap=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ReserveConfig::from_env() {
        Ok(config) => config,
        Err(e) => return report(&e),
    };

    let command = std::env::args().nth(1).unwrap_or_else(|| "auth".to_string());
    tracing::info!(command = %command, endpoint = config.endpoint(), "Calling reserve service");

    match command.as_str() {
        "auth" => match purchase_number_auth(&config, &auth_args()).await {
            Ok(result) => print_json(&result),
            Err(e) => report(&e),
        },
        "seat" => match seat_info_sync(&config, &seat_args(DeleteFlag::False)).await {
            Ok(result) => print_json(&result),
            Err(e) => report(&e),
        },
        "cancel" => match seat_info_sync(&config, &seat_args(DeleteFlag::True)).await {
            Ok(result) => print_json(&result),
            Err(e) => report(&e),
        },
        other => {
            eprintln!("Unknown command '{other}'. Usage: reserve-cli [auth|seat|cancel]");
            ExitCode::from(2)
        }
    }
}
