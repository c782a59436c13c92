//! Wire format of `SeatInfoSync`
//!
//! Parameter order is fixed by the backend. `knyknrNoInfo` (alias `q1`) and
//! `zskInfo` (alias `q2`) are array wrappers; their items and the nested
//! `KNSH_INFO` wrapper and items declare `tns`. All aliases are bound to
//! [`MODEL_NAMESPACE`].

use super::{
    InvalidPurchaseNumberInfo, InvalidTicketDetailInfo, InvalidTicketTypeInfo, KnshInfo,
    KnyknrNoInfo, SeatInfoSyncIn, ZskInfo,
};
use crate::error::MappingError;
use crate::service::{list, optional_text};
use mvtk_soap::{Namespace, NamespacedList, OPERATION_PREFIX, SoapError, XmlElement};

/// Data contract namespace of the seat-info sync model
pub const MODEL_NAMESPACE: &str =
    "http://schemas.datacontract.org/2004/07/MTBS.WCFModel.Seat.SeatInfoSyncSvc.SeatInfoSyncModel";

const PURCHASE_LIST_NAMESPACE: Namespace = Namespace::new("q1", MODEL_NAMESPACE);
const SEAT_LIST_NAMESPACE: Namespace = Namespace::new("q2", MODEL_NAMESPACE);
const ITEM_NAMESPACE: Namespace = Namespace::new("tns", MODEL_NAMESPACE);

/// `SeatInfoSync` parameters as sent to the backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatInfoSyncRequest {
    /// `kgygishCd`
    pub kgygish_cd: String,
    /// `yykDvcTyp`
    pub yyk_dvc_typ: String,
    /// `trkshFlg`
    pub trksh_flg: String,
    /// `kgygishSstmZskyykNo`
    pub kgygish_sstm_zskyyk_no: String,
    /// `kgygishUsrZskyykNo`
    pub kgygish_usr_zskyyk_no: String,
    /// `jeiDt`
    pub jei_dt: String,
    /// `kijYmd`
    pub kij_ymd: String,
    /// `stCd`
    pub st_cd: String,
    /// `screnCd`
    pub scren_cd: String,
    /// `knyknrNoInfo`
    pub knyknr_no_info: NamespacedList<KnyknrNoInfoItem>,
    /// `zskInfo`
    pub zsk_info: NamespacedList<ZskInfoItem>,
    /// `skhnCd`
    pub skhn_cd: String,
}

/// `KnyknrNoInfo` list item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnyknrNoInfoItem {
    /// Namespace declared on the item
    pub namespace: Namespace,
    /// `KNSH_INFO`
    pub knsh_info: NamespacedList<KnshInfoItem>,
    /// `KNYKNR_NO`
    pub knyknr_no: String,
    /// `PIN_CD`
    pub pin_cd: String,
}

/// `KnshInfo` list item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnshInfoItem {
    /// Namespace declared on the item
    pub namespace: Namespace,
    /// `KNSH_TYP`
    pub knsh_typ: String,
    /// `MI_NUM`, decimal string
    pub mi_num: String,
}

/// `ZskInfo` list item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZskInfoItem {
    /// Namespace declared on the item
    pub namespace: Namespace,
    /// `ZSK_CD`
    pub zsk_cd: String,
}

impl From<&SeatInfoSyncIn> for SeatInfoSyncRequest {
    fn from(args: &SeatInfoSyncIn) -> Self {
        let purchases = args
            .knyknr_no_info
            .iter()
            .map(|info| KnyknrNoInfoItem {
                namespace: ITEM_NAMESPACE,
                knsh_info: NamespacedList::new(
                    ITEM_NAMESPACE,
                    info.knsh_info
                        .iter()
                        .map(|knsh| KnshInfoItem {
                            namespace: ITEM_NAMESPACE,
                            knsh_typ: knsh.knsh_typ.clone(),
                            mi_num: knsh.mi_num.to_string(),
                        })
                        .collect(),
                ),
                knyknr_no: info.knyknr_no.clone(),
                pin_cd: info.pin_cd.clone(),
            })
            .collect();

        let seats = args
            .zsk_info
            .iter()
            .map(|seat| ZskInfoItem {
                namespace: ITEM_NAMESPACE,
                zsk_cd: seat.zsk_cd.clone(),
            })
            .collect();

        Self {
            kgygish_cd: args.kgygish_cd.clone(),
            yyk_dvc_typ: args.yyk_dvc_typ.as_str().to_string(),
            trksh_flg: args.trksh_flg.as_str().to_string(),
            kgygish_sstm_zskyyk_no: args.kgygish_sstm_zskyyk_no.clone(),
            kgygish_usr_zskyyk_no: args.kgygish_usr_zskyyk_no.clone(),
            jei_dt: args.jei_dt.clone(),
            kij_ymd: args.kij_ymd.clone(),
            st_cd: args.st_cd.clone(),
            scren_cd: args.scren_cd.clone(),
            knyknr_no_info: NamespacedList::new(PURCHASE_LIST_NAMESPACE, purchases),
            zsk_info: NamespacedList::new(SEAT_LIST_NAMESPACE, seats),
            skhn_cd: args.skhn_cd.clone(),
        }
    }
}

impl TryFrom<&SeatInfoSyncRequest> for SeatInfoSyncIn {
    type Error = MappingError;

    fn try_from(request: &SeatInfoSyncRequest) -> Result<Self, Self::Error> {
        let knyknr_no_info = request
            .knyknr_no_info
            .items
            .iter()
            .map(|item| -> Result<KnyknrNoInfo, MappingError> {
                let knsh_info = item
                    .knsh_info
                    .items
                    .iter()
                    .map(|knsh| -> Result<KnshInfo, MappingError> {
                        let mi_num = knsh.mi_num.parse().map_err(|_| MappingError::InvalidCount {
                            name: "MI_NUM",
                            value: knsh.mi_num.clone(),
                        })?;
                        Ok(KnshInfo {
                            knsh_typ: knsh.knsh_typ.clone(),
                            mi_num,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(KnyknrNoInfo {
                    knyknr_no: item.knyknr_no.clone(),
                    pin_cd: item.pin_cd.clone(),
                    knsh_info,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            kgygish_cd: request.kgygish_cd.clone(),
            yyk_dvc_typ: request.yyk_dvc_typ.parse()?,
            trksh_flg: request.trksh_flg.parse()?,
            kgygish_sstm_zskyyk_no: request.kgygish_sstm_zskyyk_no.clone(),
            kgygish_usr_zskyyk_no: request.kgygish_usr_zskyyk_no.clone(),
            jei_dt: request.jei_dt.clone(),
            kij_ymd: request.kij_ymd.clone(),
            st_cd: request.st_cd.clone(),
            scren_cd: request.scren_cd.clone(),
            knyknr_no_info,
            zsk_info: request
                .zsk_info
                .items
                .iter()
                .map(|item| ZskInfo {
                    zsk_cd: item.zsk_cd.clone(),
                })
                .collect(),
            skhn_cd: request.skhn_cd.clone(),
        })
    }
}

impl SeatInfoSyncRequest {
    /// Operation parameters in backend order
    #[must_use]
    pub fn into_parameters(self) -> Vec<XmlElement> {
        let purchase_list = self.knyknr_no_info;
        let purchases = purchase_list
            .items
            .into_iter()
            .map(|item| encode_purchase(purchase_list.namespace, item));

        let seat_list = self.zsk_info;
        let seats = seat_list.items.into_iter().map(|item| {
            XmlElement::new(seat_list.namespace.qualify("ZskInfo"))
                .with_namespace(item.namespace)
                .with_child(XmlElement::text_element(
                    item.namespace.qualify("ZSK_CD"),
                    item.zsk_cd,
                ))
        });

        vec![
            parameter("kgygishCd", self.kgygish_cd),
            parameter("yykDvcTyp", self.yyk_dvc_typ),
            parameter("trkshFlg", self.trksh_flg),
            parameter("kgygishSstmZskyykNo", self.kgygish_sstm_zskyyk_no),
            parameter("kgygishUsrZskyykNo", self.kgygish_usr_zskyyk_no),
            parameter("jeiDt", self.jei_dt),
            parameter("kijYmd", self.kij_ymd),
            parameter("stCd", self.st_cd),
            parameter("screnCd", self.scren_cd),
            XmlElement::new(format!("{OPERATION_PREFIX}:knyknrNoInfo"))
                .with_namespace(purchase_list.namespace)
                .with_children(purchases),
            XmlElement::new(format!("{OPERATION_PREFIX}:zskInfo"))
                .with_namespace(seat_list.namespace)
                .with_children(seats),
            parameter("skhnCd", self.skhn_cd),
        ]
    }
}

fn encode_purchase(list_namespace: Namespace, item: KnyknrNoInfoItem) -> XmlElement {
    let ns = item.namespace;
    let knsh_list = item.knsh_info;
    let knsh_items = knsh_list.items.into_iter().map(|knsh| {
        XmlElement::new(knsh_list.namespace.qualify("KnshInfo"))
            .with_namespace(knsh.namespace)
            .with_child(XmlElement::text_element(knsh.namespace.qualify("KNSH_TYP"), knsh.knsh_typ))
            .with_child(XmlElement::text_element(knsh.namespace.qualify("MI_NUM"), knsh.mi_num))
    });

    XmlElement::new(list_namespace.qualify("KnyknrNoInfo"))
        .with_namespace(ns)
        .with_child(
            XmlElement::new(ns.qualify("KNSH_INFO"))
                .with_namespace(knsh_list.namespace)
                .with_children(knsh_items),
        )
        .with_child(XmlElement::text_element(ns.qualify("KNYKNR_NO"), item.knyknr_no))
        .with_child(XmlElement::text_element(ns.qualify("PIN_CD"), item.pin_cd))
}

fn parameter(name: &str, value: String) -> XmlElement {
    XmlElement::text_element(format!("{OPERATION_PREFIX}:{name}"), value)
}

/// Read `MKKNYKNR_NO_INFO` from a `SeatInfoSyncResult` element
pub(crate) fn decode_invalid_purchase_numbers(
    result: &XmlElement,
) -> Result<Vec<InvalidPurchaseNumberInfo>, SoapError> {
    list(result, "MKKNYKNR_NO_INFO", |item| {
        Ok(InvalidPurchaseNumberInfo {
            knyknr_no: optional_text(item, "KNYKNR_NO"),
            knyknr_no_mkujyu_typ: optional_text(item, "KNYKNR_NO_MKUJYU_TYP"),
            knyknr_nobts_mkknmi_num: optional_text(item, "KNYKNR_NOBTS_MKKNMI_NUM"),
            mkknsh_info: list(item, "MKKNSH_INFO", |info| {
                Ok(InvalidTicketTypeInfo {
                    mkknsh_typ: optional_text(info, "MKKNSH_TYP"),
                    req_mi_num: optional_text(info, "REQ_MI_NUM"),
                    yk_mi_num: optional_text(info, "YK_MI_NUM"),
                    mk_mi_num: optional_text(info, "MK_MI_NUM"),
                })
            })?,
            mkkn_shsi_info: list(item, "MKKN_SHSI_INFO", |detail| {
                Ok(InvalidTicketDetailInfo {
                    knsh_typ: optional_text(detail, "KNSH_TYP"),
                    mi_num: optional_text(detail, "MI_NUM"),
                    mkjy_typ: optional_text(detail, "MKJY_TYP"),
                    yyk_dt: optional_text(detail, "YYK_DT"),
                    shy_jei_dt: optional_text(detail, "SHY_JEI_DT"),
                    shy_st_cd: optional_text(detail, "SHY_ST_CD"),
                    shy_scrn_cd: optional_text(detail, "SHY_SCRN_CD"),
                    shy_skhn_cd: optional_text(detail, "SHY_SKHN_CD"),
                    shy_skhn_nm: optional_text(detail, "SHY_SKHN_NM"),
                })
            })?,
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::enums::{DeleteFlag, ReserveDeviceType};
    use crate::error::UnknownCode;

    fn args() -> SeatInfoSyncIn {
        SeatInfoSyncIn {
            kgygish_cd: "SSK000".to_string(),
            yyk_dvc_typ: ReserveDeviceType::EntertainerSitePc,
            trksh_flg: DeleteFlag::False,
            kgygish_sstm_zskyyk_no: "118124".to_string(),
            kgygish_usr_zskyyk_no: "124".to_string(),
            jei_dt: "2017/03/02 10:00:00".to_string(),
            kij_ymd: "2017/03/02".to_string(),
            st_cd: "18".to_string(),
            scren_cd: "10".to_string(),
            knyknr_no_info: vec![KnyknrNoInfo {
                knyknr_no: "4450899842".to_string(),
                pin_cd: "7648".to_string(),
                knsh_info: vec![KnshInfo {
                    knsh_typ: "01".to_string(),
                    mi_num: 2,
                }],
            }],
            zsk_info: vec![
                ZskInfo {
                    zsk_cd: "Ａ－２".to_string(),
                },
                ZskInfo {
                    zsk_cd: "Ａ－３".to_string(),
                },
            ],
            skhn_cd: "1622700".to_string(),
        }
    }

    #[test]
    fn test_request_mapping_is_reversible() {
        let args = args();
        let request = SeatInfoSyncRequest::from(&args);

        assert_eq!(request.yyk_dvc_typ, "02");
        assert_eq!(request.trksh_flg, "0");
        assert_eq!(request.knyknr_no_info.items[0].knsh_info.items[0].mi_num, "2");
        assert_eq!(request.zsk_info.namespace, SEAT_LIST_NAMESPACE);
        assert_eq!(SeatInfoSyncIn::try_from(&request).unwrap(), args);
    }

    #[test]
    fn test_reverse_mapping_rejects_bad_count() {
        let mut request = SeatInfoSyncRequest::from(&args());
        request.knyknr_no_info.items[0].knsh_info.items[0].mi_num = "two".to_string();

        let error = SeatInfoSyncIn::try_from(&request).unwrap_err();
        assert_eq!(
            error,
            MappingError::InvalidCount {
                name: "MI_NUM",
                value: "two".to_string(),
            }
        );
    }

    #[test]
    fn test_reverse_mapping_rejects_unknown_device_type() {
        let mut request = SeatInfoSyncRequest::from(&args());
        request.yyk_dvc_typ = "99".to_string();

        assert!(matches!(
            SeatInfoSyncIn::try_from(&request),
            Err(MappingError::UnknownCode(UnknownCode { kind: "ReserveDeviceType", .. }))
        ));
    }

    #[test]
    fn test_parameters_follow_backend_order() {
        let parameters = SeatInfoSyncRequest::from(&args()).into_parameters();
        let names: Vec<_> = parameters.iter().map(|p| p.local_name()).collect();
        assert_eq!(
            names,
            vec![
                "kgygishCd",
                "yykDvcTyp",
                "trkshFlg",
                "kgygishSstmZskyykNo",
                "kgygishUsrZskyykNo",
                "jeiDt",
                "kijYmd",
                "stCd",
                "screnCd",
                "knyknrNoInfo",
                "zskInfo",
                "skhnCd",
            ]
        );
    }

    #[test]
    fn test_nested_lists_carry_namespaces() {
        let parameters = SeatInfoSyncRequest::from(&args()).into_parameters();

        assert_eq!(
            parameters[9].to_xml().unwrap(),
            format!(
                "<tns:knyknrNoInfo xmlns:q1=\"{MODEL_NAMESPACE}\">\
                 <q1:KnyknrNoInfo xmlns:tns=\"{MODEL_NAMESPACE}\">\
                 <tns:KNSH_INFO xmlns:tns=\"{MODEL_NAMESPACE}\">\
                 <tns:KnshInfo xmlns:tns=\"{MODEL_NAMESPACE}\">\
                 <tns:KNSH_TYP>01</tns:KNSH_TYP><tns:MI_NUM>2</tns:MI_NUM>\
                 </tns:KnshInfo>\
                 </tns:KNSH_INFO>\
                 <tns:KNYKNR_NO>4450899842</tns:KNYKNR_NO><tns:PIN_CD>7648</tns:PIN_CD>\
                 </q1:KnyknrNoInfo>\
                 </tns:knyknrNoInfo>"
            )
        );

        assert_eq!(
            parameters[10].to_xml().unwrap(),
            format!(
                "<tns:zskInfo xmlns:q2=\"{MODEL_NAMESPACE}\">\
                 <q2:ZskInfo xmlns:tns=\"{MODEL_NAMESPACE}\"><tns:ZSK_CD>Ａ－２</tns:ZSK_CD></q2:ZskInfo>\
                 <q2:ZskInfo xmlns:tns=\"{MODEL_NAMESPACE}\"><tns:ZSK_CD>Ａ－３</tns:ZSK_CD></q2:ZskInfo>\
                 </tns:zskInfo>"
            )
        );
    }

    #[test]
    fn test_decode_invalid_purchase_numbers() {
        let xml = r#"<SeatInfoSyncResult xmlns:a="urn:model">
            <a:MKKNYKNR_NO_INFO>
                <a:MkknyknrNoInfo>
                    <a:KNYKNR_NO>4450899842</a:KNYKNR_NO>
                    <a:KNYKNR_NOBTS_MKKNMI_NUM>1</a:KNYKNR_NOBTS_MKKNMI_NUM>
                    <a:KNYKNR_NO_MKUJYU_TYP>03</a:KNYKNR_NO_MKUJYU_TYP>
                    <a:MKKNSH_INFO>
                        <a:MkknshInfo>
                            <a:MKKNSH_TYP>01</a:MKKNSH_TYP>
                            <a:MK_MI_NUM>1</a:MK_MI_NUM>
                            <a:REQ_MI_NUM>2</a:REQ_MI_NUM>
                            <a:YK_MI_NUM>1</a:YK_MI_NUM>
                        </a:MkknshInfo>
                    </a:MKKNSH_INFO>
                    <a:MKKN_SHSI_INFO>
                        <a:MkknShsiInfo>
                            <a:KNSH_TYP>01</a:KNSH_TYP>
                            <a:MI_NUM>1</a:MI_NUM>
                            <a:MKJY_TYP>02</a:MKJY_TYP>
                            <a:SHY_SKHN_NM>Film</a:SHY_SKHN_NM>
                        </a:MkknShsiInfo>
                    </a:MKKN_SHSI_INFO>
                </a:MkknyknrNoInfo>
            </a:MKKNYKNR_NO_INFO>
        </SeatInfoSyncResult>"#;
        let element = XmlElement::parse(xml).unwrap();

        let infos = decode_invalid_purchase_numbers(&element).unwrap();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].knyknr_no_mkujyu_typ, "03");
        assert_eq!(infos[0].mkknsh_info[0].req_mi_num, "2");
        assert_eq!(infos[0].mkkn_shsi_info[0].mkjy_typ, "02");
        assert_eq!(infos[0].mkkn_shsi_info[0].shy_st_cd, "");
    }
}
