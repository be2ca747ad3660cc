#[cfg(test)]
mod records_tests {
    use crate::records::enums::lookup_value::LookupValue;
    use crate::records::enums::record::Record;
    use crate::records::enums::record_kind::RecordKind;
    use crate::records::structs::announce_log::AnnounceLog;
    use crate::records::structs::file_record::FileRecord;
    use crate::records::structs::file_user_record::FileUserRecord;
    use crate::records::structs::lookup::Lookup;
    use crate::records::structs::user_record::UserRecord;
    use crate::records::traits::storable::Storable;

    const INFO_HASH: &str = "0123456789abcdef0123456789abcdef01234567";

    fn announce_log() -> AnnounceLog {
        AnnounceLog {
            id: 1,
            info_hash: INFO_HASH.to_string(),
            peer_id: String::from("-TR2940-abcdefghijkl"),
            ip: String::from("192.0.2.1"),
            port: 6881,
            uploaded: 1024,
            downloaded: 2048,
            left: 4096,
            event: String::from("started"),
            time: 1_700_000_000,
        }
    }

    #[test]
    fn test_announce_log_key_matches_known_digest() {
        assert_eq!(announce_log().key(), "704e7093795f96dd8854b236386ec74f6ac3b8d4");
    }

    #[test]
    fn test_keys_per_kind() {
        let file = FileRecord { info_hash: INFO_HASH.to_string(), ..Default::default() };
        assert_eq!(file.key(), "1763c39ce6b00a9c878b5ffc4f7347419a8d1131");

        let file_user = FileUserRecord { file_id: 3, user_id: 7, ..Default::default() };
        assert_eq!(file_user.identity(), "3_7");
        assert_eq!(file_user.key(), "4f51df9922e7c6d6d005e00a69c254542a846b31");

        let user = UserRecord { username: String::from("goat"), ..Default::default() };
        assert_eq!(user.key(), "69a6387c9f80cd413ec6903424b36e83b86100f7");
    }

    #[test]
    fn test_key_ignores_non_identity_fields() {
        let first = announce_log();
        let mut second = announce_log();
        second.uploaded = 0;
        second.ip = String::from("203.0.113.5");
        assert_eq!(first.key(), second.key());
    }

    #[test]
    fn test_same_identity_different_kind_differs() {
        let log: Record = announce_log().into();
        let file: Record = FileRecord { info_hash: INFO_HASH.to_string(), ..Default::default() }.into();
        assert_eq!(log.identity(), file.identity());
        assert_ne!(log.key(), file.key());
    }

    #[test]
    fn test_record_kind_dispatch() {
        assert_eq!(Record::from(announce_log()).kind(), RecordKind::AnnounceLog);
        assert_eq!(Record::from(FileRecord::default()).kind(), RecordKind::File);
        assert_eq!(Record::from(FileUserRecord::default()).kind(), RecordKind::FileUser);
        assert_eq!(Record::from(UserRecord::default()).kind(), RecordKind::User);
    }

    #[test]
    fn test_record_encode_decode() {
        let record: Record = announce_log().into();
        let data = record.encode().unwrap();
        assert_eq!(Record::decode(&data).unwrap(), record);
    }

    #[test]
    fn test_record_kind_metadata() {
        assert_eq!(RecordKind::FileUser.table_name(), "files_users");
        assert_eq!(RecordKind::FileUser.identity_columns(), &["file_id", "user_id"]);
        assert!(RecordKind::File.has_column("verified"));
        assert!(!RecordKind::File.has_column("verified; DROP TABLE files"));
        assert!(!RecordKind::User.is_map_stored());
        assert!(RecordKind::AnnounceLog.is_map_stored());
        assert_eq!(format!("{}", RecordKind::User), "users");
    }

    #[test]
    fn test_lookup_identity() {
        assert_eq!(Lookup::by_info_hash(INFO_HASH).identity(RecordKind::File), Some(INFO_HASH.to_string()));
        assert_eq!(Lookup::by_file_user(3, 7).identity(RecordKind::FileUser), Some(String::from("3_7")));
        assert_eq!(Lookup::by_id(3).identity(RecordKind::File), None);
        assert_eq!(Lookup::new("file_id", 3i64).and("file_id", 7i64).identity(RecordKind::FileUser), None);
        assert_eq!(Lookup::by_file_user(3, 7).and("active", 1i64).identity(RecordKind::FileUser), None);
    }

    #[test]
    fn test_lookup_identity_ignores_condition_order() {
        let reversed = Lookup::new("user_id", 7i64).and("file_id", 3i64);
        assert_eq!(reversed.identity(RecordKind::FileUser), Some(String::from("3_7")));
        assert_eq!(
            reversed.identity(RecordKind::FileUser).map(|identity| RecordKind::FileUser.key_for(&identity)),
            Some(Record::FileUser(FileUserRecord { file_id: 3, user_id: 7, ..Default::default() }).key())
        );
    }

    #[test]
    fn test_lookup_identity_matches_record_key() {
        let record = FileUserRecord { file_id: 3, user_id: 7, ..Default::default() };
        let identity = record.identity_lookup().identity(RecordKind::FileUser).unwrap();
        assert_eq!(RecordKind::FileUser.key_for(&identity), record.key());
    }

    #[test]
    fn test_lookup_from_identity() {
        assert_eq!(Lookup::from_identity(RecordKind::FileUser, "3_7"), Some(Lookup::by_file_user(3, 7)));
        assert_eq!(Lookup::from_identity(RecordKind::FileUser, "3-7"), None);
        assert_eq!(Lookup::from_identity(RecordKind::User, "goat"), Some(Lookup::by_username("goat")));
    }

    #[test]
    fn test_lookup_json_shape() {
        let lookup = Lookup::by_file_user(3, 9);
        let json = serde_json::to_string(&lookup).unwrap();
        assert_eq!(serde_json::from_str::<Lookup>(&json).unwrap(), lookup);
        assert!(json.contains("file_id") && json.contains("user_id"));
    }

    #[test]
    fn test_lookup_unknown_columns() {
        let lookup = Lookup::new("passkey", "abc").and("password", "hunter2");
        assert_eq!(lookup.unknown_columns(RecordKind::User), vec!["password"]);
        assert!(Lookup::by_username("goat").unknown_columns(RecordKind::User).is_empty());
    }

    #[test]
    fn test_lookup_value_conversions() {
        assert_eq!(LookupValue::from(5i64), LookupValue::Int(5));
        assert_eq!(LookupValue::from("x"), LookupValue::Text(String::from("x")));
        assert_eq!(LookupValue::Int(42).to_string(), "42");
    }
}
