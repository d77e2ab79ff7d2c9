use std::str::FromStr;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

use ctower_core::text::is_valid_operation_text;
use ctower_core::{
    parse_operation_info, ExtractionError, OperationInfo, OperationInfoParser, OperationParser,
};

const PRUEBA_2: &str = include_str!("fixtures/prueba_2.txt");
const MISMATCH: &str = include_str!("fixtures/mismatch.txt");

#[test]
fn test_prueba_2_scalars() {
    let op = parse_operation_info(PRUEBA_2);

    assert_eq!(op.cliente, "MALE");
    assert_eq!(op.pais_importador, "México");
    assert_eq!(op.pais_exportador, "China");
    assert_eq!(op.valor_total_compra, Decimal::from(80000));
    assert_eq!(op.moneda_pago, "USD");
    assert_eq!(op.terminos_pago, "25% anticipo, 75% contra copia de BL");
    assert_eq!(op.incoterm_compra, "FOB");
    assert_eq!(op.incoterm_venta, "DAP");
}

#[test]
fn test_prueba_2_bank_block() {
    let op = parse_operation_info(PRUEBA_2);

    assert_eq!(op.beneficiario, "NINGBO HOMEWARE CO., LTD");
    assert_eq!(op.banco, "ZHEJIANG CHOUZHOU COMMERCIAL BANK");
    assert_eq!(op.direccion_banco, "YIWULEYUAN, SOUTH CHOUZHOU ROAD, YIWU, ZHEJIANG");
    assert_eq!(op.numero_cuenta, "15602142010050567");
    assert_eq!(op.swift, "ZJCBCN2N");
}

#[test]
fn test_prueba_2_schedules() {
    let op = parse_operation_info(PRUEBA_2);

    assert_eq!(op.giros.len(), 2);
    assert_eq!(op.giros[0].valor_solicitado, Decimal::from(20000));
    assert_eq!(op.giros[0].numero_giro, "1er Giro a Proveedor");
    assert_eq!(op.giros[0].porcentaje_giro, "25% del total");
    assert_eq!(op.giros[0].estado, "Pendiente");
    assert_eq!(op.giros[1].valor_solicitado, Decimal::from(60000));
    assert_eq!(op.giros[1].estado, "Pagado");

    assert_eq!(op.liberaciones.len(), 3);
    let numbers: Vec<u32> = op.liberaciones.iter().map(|l| l.numero).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    let capitals: Vec<Decimal> = op.liberaciones.iter().map(|l| l.capital).collect();
    assert_eq!(
        capitals,
        vec![Decimal::from(40000), Decimal::from(20000), Decimal::from(20000)]
    );
    assert_eq!(op.liberaciones[0].fecha, "2025-07-25");
    assert_eq!(op.liberaciones[1].fecha, "2025-08-25");
    assert_eq!(op.liberaciones[2].fecha, "2025-09-25");
}

#[test]
fn test_prueba_2_feedback() {
    let op = parse_operation_info(PRUEBA_2);

    assert!(!op.feedback.inconvenientes);
    assert_eq!(op.feedback.descripcion_inconvenientes, None);
    assert_eq!(op.feedback.calificacion, Some(5));
}

#[test]
fn test_prueba_2_giros_match_total() {
    let op = parse_operation_info(PRUEBA_2);

    assert_eq!(op.giros_total(), Some(op.valor_total_compra));
    assert_eq!(op.liberaciones_total(), Some(op.valor_total_compra));
    assert!(op.reconcile(Decimal::ZERO).is_ok());
    assert!(op.validate().is_empty());
}

#[test]
fn test_mismatch_fixture_is_tolerated() {
    assert!(is_valid_operation_text(MISMATCH));

    let op = parse_operation_info(MISMATCH);

    assert_eq!(op.cliente, "TEXTILES DEL PACÍFICO");
    assert_eq!(op.pais_importador, "Perú");
    assert_eq!(op.pais_exportador, "India");
    assert_eq!(op.valor_total_compra, Decimal::from(55000));
    assert_eq!(op.moneda_pago, "USD NA");
    assert_eq!(op.giros.len(), 2);
    assert_eq!(op.liberaciones.len(), 1);
    assert_eq!(op.liberaciones[0].numero, 1);
    assert_eq!(op.liberaciones[0].fecha, "a definir");

    assert_eq!(
        op.reconcile(Decimal::new(1, 2)),
        Err(ExtractionError::TotalMismatch {
            declared: Decimal::from(55000),
            disbursed: Decimal::from(50000),
        })
    );
}

#[test]
fn test_extreme_amounts_are_flagged_not_fatal() {
    let text = "CLIENTE: X\nVALOR TOTAL DE COMPRA: 10\n---\nVALOR SOLICITADO: 79228162514264337593543950335\n---\nVALOR SOLICITADO: 79228162514264337593543950335";
    let op = parse_operation_info(text);

    assert_eq!(op.giros.len(), 2);
    assert_eq!(op.giros_total(), None);
    assert_eq!(
        op.reconcile(Decimal::new(1, 2)),
        Err(ExtractionError::AmountOverflow("giros"))
    );
    assert!(!op.validate().is_empty());

    let text = "CLIENTE: X\nVALOR TOTAL DE COMPRA: -79228162514264337593543950335\n---\nVALOR SOLICITADO: 79228162514264337593543950335";
    let op = parse_operation_info(text);

    assert_eq!(op.valor_total_compra, Decimal::MIN);
    assert_eq!(
        op.reconcile(Decimal::new(1, 2)),
        Err(ExtractionError::TotalMismatch {
            declared: Decimal::MIN,
            disbursed: Decimal::MAX,
        })
    );
    assert!(op
        .validate()
        .iter()
        .any(|issue| issue.contains("differs from purchase total")));
}

#[test]
fn test_parsing_is_idempotent() {
    let parser = OperationInfoParser::new();
    for text in [PRUEBA_2, MISMATCH, "", "CLIENTE: X"] {
        assert_eq!(parser.parse(text), parser.parse(text));
        assert_eq!(parser.parse_with_report(text), parser.parse_with_report(text));
    }
}

#[test]
fn test_parsing_is_total() {
    let inputs = [
        "",
        "   \n\t  ",
        "no labels at all",
        "---\n---\n---",
        "NPS",
        "Liberación",
        "Liberación 99999999999999999999",
        "*******DATOS BANCARIOS*******",
        "VALOR SOLICITADO:",
        "Capital:",
        "CLIENTE: ñandú 漢字 🚢\nVALOR TOTAL DE COMPRA: -",
        "\r\r\r\n",
    ];

    for text in inputs {
        let op = parse_operation_info(text);
        assert!(op.giros.is_empty(), "unexpected giros for {text:?}");
        assert!(op.valor_total_compra.is_zero());
    }

    let op = parse_operation_info("Liberación");
    assert_eq!(op.liberaciones.len(), 1);
    assert_eq!(op.liberaciones[0].capital, Decimal::ZERO);
    assert_eq!(op.liberaciones[0].fecha, "");
}

#[test]
fn test_empty_text_yields_default_record() {
    assert_eq!(parse_operation_info(""), OperationInfo::default());
}

#[test]
fn test_incoterm_independence() {
    let op = parse_operation_info("INCOTERM COMPRA: FOB - SHANGHAI");
    assert_eq!(op.incoterm_compra, "FOB");
    assert_eq!(op.incoterm_venta, "");

    let op = parse_operation_info("INCOTERM VENTA: cif");
    assert_eq!(op.incoterm_compra, "");
    assert_eq!(op.incoterm_venta, "CIF");
}

#[test]
fn test_incoterm_typo_tolerance() {
    let canonical = parse_operation_info("CLIENTE: A\nINCOTERM COMPRA: EXW - NINGBO\nINCOTERM VENTA: DDP");
    let typo = parse_operation_info("CLIENTE: A\nICOTERM COMPRA: EXW - NINGBO\nICOTERM VENTA: DDP");

    assert_eq!(canonical.incoterm_compra, "EXW");
    assert_eq!(canonical.incoterm_venta, "DDP");
    assert_eq!(canonical, typo);
}

#[test]
fn test_giro_order_preserved() {
    let text = "VALOR SOLICITADO: 3\n---\nVALOR SOLICITADO: 1\n---\nVALOR SOLICITADO: 2";
    let values: Vec<Decimal> = parse_operation_info(text)
        .giros
        .iter()
        .map(|g| g.valor_solicitado)
        .collect();
    assert_eq!(values, vec![Decimal::from(3), Decimal::from(1), Decimal::from(2)]);
}

#[test]
fn test_serialized_shape() {
    let op = parse_operation_info(PRUEBA_2);
    let json = serde_json::to_value(&op).unwrap();

    assert_eq!(json["valorTotalCompra"], 80000.0);
    assert_eq!(json["incotermCompra"], "FOB");
    assert_eq!(json["giros"][0]["numeroGiro"], "1er Giro a Proveedor");
    assert_eq!(json["liberaciones"][0]["fecha"], "2025-07-25");
    assert_eq!(json["calificacion"], 5);

    let back: OperationInfo = serde_json::from_value(json).unwrap();
    assert_eq!(back.giros_total(), Some(Decimal::from_str("80000").unwrap()));
}
