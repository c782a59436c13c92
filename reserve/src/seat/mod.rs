//! Seat-info synchronization
//!
//! Reports reserved (or cancelled) seats for a screening back to the backend,
//! together with the purchase numbers and ticket types they were paid with.

pub mod wire;

use crate::config::ReserveConfig;
use crate::enums::{DeleteFlag, ReservationResult, ReserveDeviceType};
use crate::error::ReserveError;
use crate::service::{self, ResultInfo};
use serde::{Deserialize, Serialize};
use wire::SeatInfoSyncRequest;

/// Service description path under the base endpoint
pub const SERVICE_PATH: &str = "/Seat/SeatInfoSyncSvc.svc?singleWsdl";

const OPERATION: &str = "SeatInfoSync";

/// Ticket type and count used from a purchase number
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnshInfo {
    /// Ticket type
    pub knsh_typ: String,
    /// Number of tickets
    pub mi_num: u32,
}

/// Purchase number used for the reservation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnyknrNoInfo {
    /// Purchase-management number
    pub knyknr_no: String,
    /// PIN code
    pub pin_cd: String,
    /// Ticket types used
    pub knsh_info: Vec<KnshInfo>,
}

/// Reserved seat
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZskInfo {
    /// Seat code
    pub zsk_cd: String,
}

/// Seat-info sync input
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatInfoSyncIn {
    /// Exhibitor company code
    pub kgygish_cd: String,
    /// Reservation device type
    pub yyk_dvc_typ: ReserveDeviceType,
    /// Register or cancel
    pub trksh_flg: DeleteFlag,
    /// Exhibitor system seat reservation number
    pub kgygish_sstm_zskyyk_no: String,
    /// Exhibitor user seat reservation number
    pub kgygish_usr_zskyyk_no: String,
    /// Screening date and time
    pub jei_dt: String,
    /// Booking date
    pub kij_ymd: String,
    /// Site code
    pub st_cd: String,
    /// Screen code
    pub scren_cd: String,
    /// Purchase numbers used
    pub knyknr_no_info: Vec<KnyknrNoInfo>,
    /// Seats, in the order the backend should record them
    pub zsk_info: Vec<ZskInfo>,
    /// Film code
    pub skhn_cd: String,
}

/// Invalid ticket type counts
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidTicketTypeInfo {
    /// Invalid ticket type
    pub mkknsh_typ: String,
    /// Requested count
    pub req_mi_num: String,
    /// Valid count
    pub yk_mi_num: String,
    /// Invalid count
    pub mk_mi_num: String,
}

/// Invalid ticket details
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidTicketDetailInfo {
    /// Ticket type
    pub knsh_typ: String,
    /// Count
    pub mi_num: String,
    /// Invalidity reason type
    pub mkjy_typ: String,
    /// Reservation date and time
    pub yyk_dt: String,
    /// Screening date and time the ticket was used for
    pub shy_jei_dt: String,
    /// Site code the ticket was used at
    pub shy_st_cd: String,
    /// Screen code the ticket was used at
    pub shy_scrn_cd: String,
    /// Film code the ticket was used for
    pub shy_skhn_cd: String,
    /// Film name the ticket was used for
    pub shy_skhn_nm: String,
}

/// Purchase number rejected by the sync
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidPurchaseNumberInfo {
    /// Purchase-management number
    pub knyknr_no: String,
    /// Invalidity category, see [`InvalidityCategory`](crate::InvalidityCategory)
    pub knyknr_no_mkujyu_typ: String,
    /// Invalid ticket count for this purchase number
    pub knyknr_nobts_mkknmi_num: String,
    /// Invalid ticket types
    pub mkknsh_info: Vec<InvalidTicketTypeInfo>,
    /// Invalid ticket details
    pub mkkn_shsi_info: Vec<InvalidTicketDetailInfo>,
}

/// Seat-info sync output
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatInfoSyncResult {
    /// Result envelope
    pub result_info: ResultInfo,
    /// Reservation result (`Success` or `CancelSuccess`)
    pub zskyyk_result: ReservationResult,
    /// Rejected purchase numbers
    pub mkknyknr_no_info: Vec<InvalidPurchaseNumberInfo>,
}

/// Synchronize seat reservations
///
/// # Errors
///
/// - `ReserveError::Transport` if the service description or the call fails
/// - `ReserveError::BackendStatus` if the result envelope is not a success
/// - `ReserveError::ReservationResult` if the reservation result is absent or
///   neither `Success` nor `CancelSuccess`
#[tracing::instrument(skip_all, name = "seat_info_sync")]
pub async fn seat_info_sync(
    config: &ReserveConfig,
    args: &SeatInfoSyncIn,
) -> Result<SeatInfoSyncResult, ReserveError> {
    tracing::debug!(
        trksh_flg = %args.trksh_flg,
        seats = args.zsk_info.len(),
        "Synchronizing seat info"
    );

    let parameters = SeatInfoSyncRequest::from(args).into_parameters();
    let (result, info) = service::invoke(config, SERVICE_PATH, OPERATION, parameters).await?;

    let code = service::optional_text(&result, "ZSKYYK_RESULT");
    let zskyyk_result = match code.parse::<ReservationResult>() {
        Ok(zskyyk_result) if zskyyk_result.is_success() => zskyyk_result,
        _ => {
            tracing::warn!(code = %code, "Seat reservation was not accepted");
            return Err(ReserveError::ReservationResult {
                status: info.status,
                code,
            });
        }
    };

    Ok(SeatInfoSyncResult {
        result_info: info,
        zskyyk_result,
        mkknyknr_no_info: wire::decode_invalid_purchase_numbers(&result)?,
    })
}
