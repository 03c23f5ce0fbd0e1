//! Static lookup from vendor sport codes to display names.

/// Placeholder for sport ids not present in the table. The vendor extends
/// the code space, so an unknown id must resolve instead of failing.
pub const UNKNOWN_ACTIVITY: &str = "Unknown Activity";

/// Fixed sport id table. `-1` is the vendor's sentinel for an
/// unspecified/manual activity.
static SPORT_NAMES: &[(i64, &str)] = &[
    (-1, "Activity"),
    (0, "Running"),
    (1, "Cycling"),
    (16, "Baseball"),
    (17, "Basketball"),
    (18, "Rowing"),
    (19, "Fencing"),
    (20, "Field Hockey"),
    (21, "Football"),
    (22, "Golf"),
    (24, "Ice Hockey"),
    (25, "Lacrosse"),
    (27, "Rugby"),
    (28, "Sailing"),
    (29, "Skiing"),
    (30, "Soccer"),
    (31, "Softball"),
    (32, "Squash"),
    (33, "Swimming"),
    (34, "Tennis"),
    (35, "Track & Field"),
    (36, "Volleyball"),
    (37, "Water Polo"),
    (38, "Wrestling"),
    (39, "Boxing"),
    (42, "Dance"),
    (43, "Pilates"),
    (44, "Yoga"),
    (45, "Weightlifting"),
    (47, "Cross Country Skiing"),
    (48, "Functional Fitness"),
    (49, "Duathlon"),
    (51, "Gymnastics"),
    (52, "Hiking/Rucking"),
    (53, "Horseback Riding"),
    (55, "Kayaking"),
    (56, "Martial Arts"),
    (57, "Mountain Biking"),
    (59, "Powerlifting"),
    (60, "Rock Climbing"),
    (61, "Paddleboarding"),
    (62, "Triathlon"),
    (63, "Walking"),
    (64, "Surfing"),
    (65, "Elliptical"),
    (66, "Stairmaster"),
    (70, "Meditation"),
    (71, "Other"),
    (73, "Diving"),
    (74, "Operations - Tactical"),
    (75, "Operations - Medical"),
    (76, "Operations - Flying"),
    (77, "Operations - Water"),
    (82, "Ultimate"),
    (83, "Climber"),
    (84, "Jumping Rope"),
    (85, "Australian Football"),
    (86, "Skateboarding"),
    (87, "Coaching"),
    (88, "Ice Bath"),
    (89, "Commuting"),
    (90, "Gaming"),
    (91, "Snowboarding"),
    (92, "Motocross"),
    (93, "Caddying"),
    (94, "Obstacle Course Racing"),
    (95, "Motor Racing"),
    (96, "HIIT"),
    (97, "Spin"),
    (98, "Jiu Jitsu"),
    (99, "Manual Labor"),
    (100, "Cricket"),
    (101, "Pickleball"),
    (102, "Inline Skating"),
    (103, "Box Fitness"),
    (104, "Spikeball"),
    (105, "Wheelchair Pushing"),
    (106, "Paddle Tennis"),
    (107, "Barre"),
    (108, "Stage Performance"),
    (109, "High Stress Work"),
    (110, "Parkour"),
    (111, "Gaelic Football"),
    (112, "Hurling/Camogie"),
    (113, "Circus Arts"),
    (114, "Archery"),
    (115, "Bowling"),
    (116, "Broomball"),
    (117, "Camping"),
    (118, "Canoeing"),
    (119, "Cardio Tennis"),
    (120, "Cheerleading"),
    (121, "Massage Therapy"),
    (122, "Curling"),
    (123, "Strength Trainer"),
    (124, "Dodgeball"),
    (125, "Watching Sports"),
    (126, "Assault Bike"),
    (127, "Kickboxing"),
    (128, "Stretching"),
    (129, "Esports"),
    (130, "Fishing"),
    (131, "Flag Football"),
    (132, "Floorball"),
    (133, "Freediving"),
    (134, "Frisbee"),
    (135, "Futsal"),
    (136, "Hang Gliding"),
    (137, "Judo"),
    (138, "Karate"),
    (139, "Kendo"),
    (140, "Kitesurfing"),
    (141, "Longboarding"),
    (142, "Luge"),
    (143, "Mixed Martial Arts"),
    (144, "Mountaineering"),
    (145, "Orienteering"),
    (146, "Paragliding"),
    (147, "Polo"),
    (148, "Racquetball"),
    (149, "Rafting"),
    (150, "Roller Derby"),
    (151, "Rollerblading"),
    (152, "Sand Volleyball"),
    (153, "Scuba Diving"),
    (154, "Shooting"),
    (155, "Skydiving"),
    (156, "Sledding"),
    (157, "Snorkeling"),
    (158, "Snowmobiling"),
    (159, "Snowshoeing"),
    (160, "Speed Skating"),
    (161, "Street Hockey"),
    (162, "Taekwondo"),
    (163, "Tai Chi"),
    (164, "Trail Running"),
    (165, "Trampoline"),
    (166, "Tubing"),
    (167, "Water Skiing"),
    (168, "Wakeboarding"),
    (169, "Windsurfing"),
    (170, "Zumba"),
    (171, "Canyoneering"),
    (172, "Bouldering"),
    (173, "Cross Training"),
    (174, "Aerobics"),
    (175, "Ballet"),
    (176, "Breathwork"),
    (177, "Chores"),
    (178, "Cold Plunge"),
    (179, "Cryotherapy"),
    (180, "Foam Rolling"),
    (181, "Physical Therapy"),
    (182, "Red Light Therapy"),
    (183, "Steam Room"),
    (184, "Hot Yoga"),
    (185, "Restorative Yoga"),
    (230, "Table Tennis"),
    (231, "Badminton"),
    (232, "Netball"),
    (233, "Sauna"),
    (234, "Disc Golf"),
    (235, "Yard Work"),
    (236, "Air Compression"),
    (237, "Percussive Massage"),
    (238, "Paintball"),
    (239, "Ice Skating"),
    (240, "Handball"),
    (241, "Acroyoga"),
    (242, "Aikido"),
    (243, "Bootcamp"),
    (244, "Calisthenics"),
    (245, "Capoeira"),
    (246, "Indoor Climbing"),
    (247, "Indoor Cycling"),
    (248, "F45 Training"),
    (249, "Padel"),
    (250, "Barry's"),
    (251, "Dedicated Parenting"),
    (252, "Stroller Walking"),
    (253, "Stroller Jogging"),
    (254, "Toddlerwearing"),
    (255, "Babywearing"),
    (256, "Playing with Child"),
    (257, "Dog Walking"),
];

/// Resolve a sport code to its display name. Ids outside the table resolve
/// to [`UNKNOWN_ACTIVITY`] rather than failing.
pub fn get_sport_name(sport_id: i64) -> &'static str {
    SPORT_NAMES
        .iter()
        .find(|(id, _)| *id == sport_id)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_ACTIVITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_the_fixed_entry_count() {
        assert_eq!(SPORT_NAMES.len(), 185);
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<i64> = SPORT_NAMES.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), SPORT_NAMES.len());
    }

    #[test]
    fn known_ids_resolve_to_documented_names() {
        assert_eq!(get_sport_name(-1), "Activity");
        assert_eq!(get_sport_name(0), "Running");
        assert_eq!(get_sport_name(1), "Cycling");
        assert_eq!(get_sport_name(44), "Yoga");
        assert_eq!(get_sport_name(63), "Walking");
        assert_eq!(get_sport_name(101), "Pickleball");
        assert_eq!(get_sport_name(249), "Padel");
    }

    #[test]
    fn every_table_entry_resolves_to_itself() {
        for (id, name) in SPORT_NAMES {
            assert_eq!(get_sport_name(*id), *name);
        }
    }

    #[test]
    fn unknown_ids_resolve_to_placeholder() {
        assert_eq!(get_sport_name(9_999), UNKNOWN_ACTIVITY);
        assert_eq!(get_sport_name(-2), UNKNOWN_ACTIVITY);
        assert_eq!(get_sport_name(2), UNKNOWN_ACTIVITY);
    }
}
