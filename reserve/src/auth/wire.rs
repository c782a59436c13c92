//! Wire format of `PurchaseNumberAuth`
//!
//! Parameter order is fixed by the backend. The purchase-number list is
//! wrapped as `knyknrNoInfoIn/KnyknrNoInfoIn[]`, the wrapper declaring `q1`
//! and every item declaring `tns`, both bound to [`MODEL_NAMESPACE`].

use super::{
    InvalidTicket, KnyknrNoInfoIn, PurchaseNumberAuthIn, PurchaseNumberAuthResult,
    PurchaseNumberInfo, ValidTicket,
};
use crate::error::UnknownCode;
use crate::service::{ResultInfo, count, list, optional_text};
use mvtk_soap::{Namespace, NamespacedList, OPERATION_PREFIX, SoapError, XmlElement};

/// Data contract namespace of the purchase-number auth model
pub const MODEL_NAMESPACE: &str =
    "http://schemas.datacontract.org/2004/07/MTBS.WCFModel.Auth.PurchaseNumberAuthSvc.PurchaseNumberAuthModel";

const LIST_NAMESPACE: Namespace = Namespace::new("q1", MODEL_NAMESPACE);
const ITEM_NAMESPACE: Namespace = Namespace::new("tns", MODEL_NAMESPACE);

/// `PurchaseNumberAuth` parameters as sent to the backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseNumberAuthRequest {
    /// `kgygishCd`
    pub kgygish_cd: String,
    /// `jhshbtsCd`
    pub jhshbts_cd: String,
    /// `knyknrNoInfoIn`
    pub knyknr_no_info_in: NamespacedList<KnyknrNoInfoInItem>,
    /// `skhnCd`
    pub skhn_cd: String,
    /// `stCd`
    pub st_cd: String,
    /// `jeiYmd`
    pub jei_ymd: String,
}

/// `KnyknrNoInfoIn` list item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnyknrNoInfoInItem {
    /// Namespace declared on the item
    pub namespace: Namespace,
    /// `KNYKNR_NO`
    pub knyknr_no: String,
    /// `PIN_CD`
    pub pin_cd: String,
}

impl From<&PurchaseNumberAuthIn> for PurchaseNumberAuthRequest {
    fn from(args: &PurchaseNumberAuthIn) -> Self {
        let items = args
            .knyknr_no_info_in
            .iter()
            .map(|info| KnyknrNoInfoInItem {
                namespace: ITEM_NAMESPACE,
                knyknr_no: info.knyknr_no.clone(),
                pin_cd: info.pin_cd.clone(),
            })
            .collect();

        Self {
            kgygish_cd: args.kgygish_cd.clone(),
            jhshbts_cd: args.jhshbts_cd.as_str().to_string(),
            knyknr_no_info_in: NamespacedList::new(LIST_NAMESPACE, items),
            skhn_cd: args.skhn_cd.clone(),
            st_cd: args.st_cd.clone(),
            jei_ymd: args.jei_ymd.clone(),
        }
    }
}

impl TryFrom<&PurchaseNumberAuthRequest> for PurchaseNumberAuthIn {
    type Error = UnknownCode;

    fn try_from(request: &PurchaseNumberAuthRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            kgygish_cd: request.kgygish_cd.clone(),
            jhshbts_cd: request.jhshbts_cd.parse()?,
            knyknr_no_info_in: request
                .knyknr_no_info_in
                .items
                .iter()
                .map(|item| KnyknrNoInfoIn {
                    knyknr_no: item.knyknr_no.clone(),
                    pin_cd: item.pin_cd.clone(),
                })
                .collect(),
            skhn_cd: request.skhn_cd.clone(),
            st_cd: request.st_cd.clone(),
            jei_ymd: request.jei_ymd.clone(),
        })
    }
}

impl PurchaseNumberAuthRequest {
    /// Operation parameters in backend order
    #[must_use]
    pub fn into_parameters(self) -> Vec<XmlElement> {
        let list = self.knyknr_no_info_in;
        let items = list.items.into_iter().map(|item| {
            XmlElement::new(list.namespace.qualify("KnyknrNoInfoIn"))
                .with_namespace(item.namespace)
                .with_child(XmlElement::text_element(
                    item.namespace.qualify("KNYKNR_NO"),
                    item.knyknr_no,
                ))
                .with_child(XmlElement::text_element(
                    item.namespace.qualify("PIN_CD"),
                    item.pin_cd,
                ))
        });

        vec![
            parameter("kgygishCd", self.kgygish_cd),
            parameter("jhshbtsCd", self.jhshbts_cd),
            XmlElement::new(format!("{OPERATION_PREFIX}:knyknrNoInfoIn"))
                .with_namespace(list.namespace)
                .with_children(items),
            parameter("skhnCd", self.skhn_cd),
            parameter("stCd", self.st_cd),
            parameter("jeiYmd", self.jei_ymd),
        ]
    }
}

fn parameter(name: &str, value: String) -> XmlElement {
    XmlElement::text_element(format!("{OPERATION_PREFIX}:{name}"), value)
}

/// Map a `PurchaseNumberAuthResult` element to typed output
pub(crate) fn decode_result(
    result: &XmlElement,
    result_info: ResultInfo,
) -> Result<PurchaseNumberAuthResult, SoapError> {
    Ok(PurchaseNumberAuthResult {
        result_info,
        ykknmi_num_sum: count(result, "YKKNMI_NUM_SUM")?,
        mkknmi_num_sum: count(result, "MKKNMI_NUM_SUM")?,
        knyknr_no_info_out: list(result, "KNYKNR_NO_INFO_OUT", decode_purchase_number_info)?,
    })
}

fn decode_purchase_number_info(item: &XmlElement) -> Result<PurchaseNumberInfo, SoapError> {
    Ok(PurchaseNumberInfo {
        knyknr_no: optional_text(item, "KNYKNR_NO"),
        knyknr_no_mkujyu_cd: optional_text(item, "KNYKNR_NO_MKUJYU_CD"),
        kgygftknkny_ymd: optional_text(item, "KGYGFTKNKNY_YMD"),
        kgygftknyk_tm: optional_text(item, "KGYGFTKNYK_TM"),
        dnsh_km_typ: optional_text(item, "DNSH_KM_TYP"),
        znkkkytskn_gkjkn_typ: optional_text(item, "ZNKKKYTSKN_GKJKN_TYP"),
        ykknmi_num: optional_text(item, "YKKNMI_NUM"),
        mkknmi_num: optional_text(item, "MKKNMI_NUM"),
        ykkn_info: list(item, "YKKN_INFO", |ticket| {
            Ok(ValidTicket {
                ykknsh_typ: optional_text(ticket, "YKKNSH_TYP"),
                eishhshk_typ: optional_text(ticket, "EISHHSHK_TYP"),
                ykkn_knshbtsmi_num: optional_text(ticket, "YKKN_KNSHBTSMI_NUM"),
                knshknhmbi_unip: optional_text(ticket, "KNSHKNHMBI_UNIP"),
                kij_unip: optional_text(ticket, "KIJ_UNIP"),
            })
        })?,
        mkkn_info: list(item, "MKKN_INFO", |ticket| {
            Ok(InvalidTicket {
                mkknsh_typ: optional_text(ticket, "MKKNSH_TYP"),
                mkkn_knshbtsmi_num: optional_text(ticket, "MKKN_KNSHBTSMI_NUM"),
                mkjy_typ: optional_text(ticket, "MKJY_TYP"),
                yyk_dt: optional_text(ticket, "YYK_DT"),
                shy_jei_dt: optional_text(ticket, "SHY_JEI_DT"),
                shy_st_cd: optional_text(ticket, "SHY_ST_CD"),
                shy_scrn_cd: optional_text(ticket, "SHY_SCRN_CD"),
                shy_skhn_cd: optional_text(ticket, "SHY_SKHN_CD"),
                shy_skhn_nm: optional_text(ticket, "SHY_SKHN_NM"),
            })
        })?,
    })
}
