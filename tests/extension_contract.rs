//! Integration tests for the extension array contract, driven through the
//! generic `ExtensionDtype` / `ExtensionArray` traits the way a host
//! framework would call them.

use minlist::{
    Concatenate, DataType, ExtensionArray, ExtensionDtype, ListArray, ListDtype, ListSlot,
    MinlistError,
};

fn column() -> ListArray {
    let factory = ListDtype::construct_array_type();
    factory.from_sequence(&[
        ListSlot::from("ab"),
        ListSlot::Null,
        ListSlot::empty(),
        ListSlot::from("xyz"),
    ])
}

/// Host-side helper that only knows the trait surface; `-1` rows become
/// the dtype's null sentinel.
fn fill_missing_rows<A: ExtensionArray>(arr: &A, rows: &[i64]) -> Result<A, MinlistError> {
    arr.take(rows, true, None)
}

#[test]
fn test_dtype_lookup_and_factory() {
    let dtype = ListDtype::construct_from_string("list").unwrap();
    assert_eq!(dtype.name(), "list");
    assert!(dtype.na_value().is_null());

    let err = ListDtype::construct_from_string("object").unwrap_err();
    assert_eq!(err, MinlistError::UnknownType { name: "object".into() });

    let arr = column();
    assert_eq!(ExtensionArray::len(&arr), 4);
    assert_eq!(arr.dtype(), dtype);
}

#[test]
fn test_get_through_trait() {
    let arr = column();
    assert_eq!(ExtensionArray::get(&arr, 0).unwrap(), &ListSlot::from("ab"));
    assert_eq!(ExtensionArray::get(&arr, -1).unwrap(), &ListSlot::from("xyz"));
    assert!(ExtensionArray::get(&arr, 4).is_err());
}

#[test]
fn test_isna_through_trait() {
    let arr = column();
    let mask = ExtensionArray::isna(&arr);
    assert_eq!(mask.as_slice(), &[false, true, false, false]);
}

#[test]
fn test_take_fill_through_trait() {
    let arr = column();
    let out = fill_missing_rows(&arr, &[3, -1, 0]).unwrap();
    assert_eq!(out.len(), 3);
    assert_eq!(out[0], ListSlot::from("xyz"));
    assert!(out[1].is_null());
    assert_eq!(out[2], ListSlot::from("ab"));

    assert_eq!(
        fill_missing_rows(&arr, &[-3]),
        Err(MinlistError::InvalidFillIndex { index: -3 })
    );
}

#[test]
fn test_take_minus_one_means_last_without_fill() {
    let arr = column();
    let out = ExtensionArray::take(&arr, &[-1i64], false, None).unwrap();
    assert_eq!(out[0], ListSlot::from("xyz"));
}

#[test]
fn test_take_error_message() {
    let empty = ListArray::default();
    let err = ExtensionArray::take(&empty, &[0i64], false, None).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Index is out of bounds or cannot do a non-empty take from an empty array."));
    assert!(ExtensionArray::take(&empty, &[] as &[i64], false, None).unwrap().is_empty());
}

#[test]
fn test_copy_and_astype_identity() {
    let arr = column();
    let copied = ExtensionArray::copy(&arr);
    assert_eq!(copied, arr);
    assert!(!std::ptr::eq(copied.slots().as_ptr(), arr.slots().as_ptr()));

    let same = ExtensionArray::astype(&arr, &DataType::List, false).unwrap();
    assert!(std::ptr::eq(same.as_list().unwrap(), &arr));
}

#[test]
fn test_astype_text_and_generic() {
    let arr = column();
    let text = arr.astype(&"str".parse::<DataType>().unwrap(), true).unwrap();
    assert_eq!(
        text.as_text().unwrap(),
        &[
            "['a', 'b']".to_string(),
            "nan".to_string(),
            "[]".to_string(),
            "['x', 'y', 'z']".to_string()
        ]
    );

    let object = arr.astype(&DataType::Object, false).unwrap();
    assert_eq!(object.len(), 4);

    assert!(matches!(
        arr.astype(&DataType::Float64, true),
        Err(MinlistError::InvalidCast { .. })
    ));
}

#[test]
fn test_concat_same_type_and_pairwise_concat_agree() {
    let a = column().select(0usize..3).unwrap();
    let b = column().select(&[3usize, 1]).unwrap();
    assert_eq!(a.len(), 3);
    assert_eq!(b.len(), 2);

    let many = <ListArray as ExtensionArray>::concat_same_type(&[&a, &b]);
    assert_eq!(many.len(), 5);
    assert_eq!(many.select(0usize..3).unwrap(), a);
    assert_eq!(many.select(3usize..).unwrap(), b);

    let pair = a.concat(b).unwrap();
    assert_eq!(pair, many);
}

#[test]
fn test_select_mask() {
    let arr = column();
    let valid: Vec<bool> = arr.isna().iter().map(|na| !na).collect();
    let dense = arr.select(valid).unwrap();
    assert_eq!(dense.len(), 3);
    assert_eq!(dense.null_count(), 0);
}
