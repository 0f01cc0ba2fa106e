//! 静态内容 fixtures
//!
//! 活动详情、传统仪式名单、FAQ、交通提示和流程时间线。
//! 单场活动，内容编译期固定；没有生命周期，只读。

use shared::models::{
    DebutData, EventDetails, FaqItem, Participant, ProgramEntry, TransportTip, Traditions,
};

fn participant(id: u32, name: &str, role: Option<&str>) -> Participant {
    Participant {
        id,
        name: name.to_string(),
        role: role.map(str::to_string),
    }
}

/// Event details (date, venue, theme, dress code)
pub fn event_details() -> EventDetails {
    EventDetails {
        debutante_name: "Maria Isabella".to_string(),
        event_date: "2025-12-29".to_string(),
        event_time: "6:00 PM".to_string(),
        venue_name: "The Grand Ballroom".to_string(),
        venue_address: "123 Celebration Avenue, Makati City, Metro Manila, Philippines 1200"
            .to_string(),
        map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3861.802259253319!2d121.01460657580858!3d14.554729185953898!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3397c90264a0ed01%3A0x2b066ed57830cace!2sMakati%20City%2C%20Metro%20Manila%2C%20Philippines!5e0!3m2!1sen!2sus!4v1702000000000!5m2!1sen!2sus".to_string(),
        theme: "An Elegant Evening".to_string(),
        dress_code: "Formal / Semi-Formal Attire".to_string(),
        dress_code_details: "Ladies are encouraged to wear elegant gowns or cocktail dresses. \
            Gentlemen should wear suits or barong tagalog. You may wear any color of your \
            choice, EXCEPT RED. Red is reserved exclusively for the debutante."
            .to_string(),
    }
}

/// 18 Treasures participants
pub fn treasures() -> Vec<Participant> {
    vec![
        participant(1, "Grandmother Elena", Some("Wisdom")),
        participant(2, "Grandfather Jose", Some("Strength")),
        participant(3, "Aunt Patricia", Some("Grace")),
        participant(4, "Uncle Roberto", Some("Courage")),
        participant(5, "Aunt Maria", Some("Kindness")),
        participant(6, "Uncle Carlos", Some("Perseverance")),
        participant(7, "Cousin Angela", Some("Joy")),
        participant(8, "Cousin Miguel", Some("Faith")),
        participant(9, "Godmother Carmen", Some("Love")),
        participant(10, "Godfather Antonio", Some("Honor")),
        participant(11, "Family Friend Liza", Some("Hope")),
        participant(12, "Family Friend Marco", Some("Patience")),
        participant(13, "Teacher Ms. Santos", Some("Knowledge")),
        participant(14, "Mentor Dr. Cruz", Some("Guidance")),
        participant(15, "Neighbor Tita Rose", Some("Generosity")),
        participant(16, "Church Elder Fr. Garcia", Some("Spirituality")),
        participant(17, "Best Friend's Mom Tita Ana", Some("Compassion")),
        participant(18, "Mother Rosario", Some("Unconditional Love")),
    ]
}

/// 18 Roses participants
pub fn roses() -> Vec<Participant> {
    vec![
        participant(1, "Father Ricardo", None),
        participant(2, "Brother Gabriel", None),
        participant(3, "Grandfather Jose", None),
        participant(4, "Uncle Roberto", None),
        participant(5, "Uncle Carlos", None),
        participant(6, "Cousin Miguel", None),
        participant(7, "Godfather Antonio", None),
        participant(8, "Family Friend Marco", None),
        participant(9, "Best Friend's Dad Tito Ben", None),
        participant(10, "Neighbor Tito Jun", None),
        participant(11, "Classmate Joshua", None),
        participant(12, "Classmate Daniel", None),
        participant(13, "Childhood Friend Mark", None),
        participant(14, "Church Friend Paolo", None),
        participant(15, "Teammate Luis", None),
        participant(16, "Cousin Andres", None),
        participant(17, "Family Friend Tito Ray", None),
        participant(18, "Special Someone David", None),
    ]
}

/// 18 Candles participants
pub fn candles() -> Vec<Participant> {
    vec![
        participant(1, "Mother Rosario", None),
        participant(2, "Sister Sofia", None),
        participant(3, "Grandmother Elena", None),
        participant(4, "Aunt Patricia", None),
        participant(5, "Aunt Maria", None),
        participant(6, "Cousin Angela", None),
        participant(7, "Godmother Carmen", None),
        participant(8, "Best Friend Sarah", None),
        participant(9, "Best Friend Emma", None),
        participant(10, "Childhood Friend Mia", None),
        participant(11, "Classmate Nicole", None),
        participant(12, "Classmate Ashley", None),
        participant(13, "Church Friend Grace", None),
        participant(14, "Teammate Julia", None),
        participant(15, "Neighbor Ate Joy", None),
        participant(16, "Cousin Isabel", None),
        participant(17, "Mentor Teacher Ms. Reyes", None),
        participant(18, "Special Friend Olivia", None),
    ]
}

/// All three traditions
pub fn traditions() -> Traditions {
    Traditions {
        treasures: treasures(),
        roses: roses(),
        candles: candles(),
    }
}

fn faq_item(id: u32, question: &str, answer: &str) -> FaqItem {
    FaqItem {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

/// Frequently asked questions, in display order
pub fn faq_items() -> Vec<FaqItem> {
    vec![
        faq_item(
            1,
            "What time should I arrive?",
            "Please arrive by 5:30 PM for cocktails and registration. The program will begin \
             promptly at 6:00 PM. Early arrival is appreciated to ensure you don't miss any of \
             the special moments.",
        ),
        faq_item(
            2,
            "Is there a parking area at the venue?",
            "Yes, the Grand Ballroom has a spacious parking lot that can accommodate up to 200 \
             vehicles. Valet parking is also available for your convenience at no additional \
             charge.",
        ),
        faq_item(
            3,
            "Can I bring a plus one?",
            "Due to venue capacity, we kindly ask that you only bring guests who are included \
             in your invitation. If you have questions about your guest list, please contact us \
             directly.",
        ),
        faq_item(
            4,
            "Will there be food accommodations for dietary restrictions?",
            "Yes, we will have vegetarian, halal, and gluten-free options available. Please \
             inform us of any dietary restrictions when you RSVP so we can make appropriate \
             arrangements.",
        ),
        faq_item(
            5,
            "What is the gift-giving etiquette?",
            "Your presence is the greatest gift! However, if you wish to give a gift, monetary \
             gifts or gift cards are appreciated. A gift table will be available at the \
             reception.",
        ),
        faq_item(
            6,
            "Is photography allowed during the event?",
            "We have hired a professional photographer and videographer for the event. Personal \
             photos are welcome during the reception, but we kindly ask that you refrain from \
             using flash photography during the ceremonies.",
        ),
        faq_item(
            7,
            "How long will the event last?",
            "The event is expected to conclude around 11:00 PM. The program includes cocktails, \
             dinner, traditional ceremonies, and dancing.",
        ),
    ]
}

fn transport_tip(id: u32, mode: &str, icon: &str, description: &str) -> TransportTip {
    TransportTip {
        id,
        mode: mode.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
    }
}

/// Transportation tips, in display order
pub fn transport_tips() -> Vec<TransportTip> {
    vec![
        transport_tip(
            1,
            "By Car",
            "car",
            "From EDSA, take the Makati Avenue exit. Continue straight for 2km, then turn right \
             at Celebration Avenue. The venue is on your left.",
        ),
        transport_tip(
            2,
            "By Public Transport",
            "bus",
            "Take the MRT to Ayala Station. From there, take a jeepney or Grab to Celebration \
             Avenue, Makati City. The ride is approximately 10 minutes.",
        ),
        transport_tip(
            3,
            "By Taxi/Grab",
            "taxi",
            "Simply input 'The Grand Ballroom, 123 Celebration Avenue, Makati City' in your \
             app. The venue is well-known to most drivers in the area.",
        ),
    ]
}

fn program_entry(id: u32, time: &str, title: &str, description: &str) -> ProgramEntry {
    ProgramEntry {
        id,
        time: time.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// Program timeline, in display order
pub fn program_timeline() -> Vec<ProgramEntry> {
    vec![
        program_entry(1, "5:30 PM", "Guest Arrival & Cocktails", "Welcome drinks and registration"),
        program_entry(2, "6:00 PM", "Grand Entrance", "The debutante's grand entrance with her court"),
        program_entry(3, "6:30 PM", "18 Roses", "Traditional father-daughter dance and 18 roses dance"),
        program_entry(4, "7:15 PM", "18 Candles", "Wishes and messages from 18 special women"),
        program_entry(5, "8:00 PM", "18 Treasures", "Gift-giving ceremony with symbolic treasures"),
        program_entry(6, "8:45 PM", "Dinner Service", "Filipino-Western fusion dinner buffet"),
        program_entry(7, "9:30 PM", "Cake Ceremony", "Birthday cake presentation and toast"),
        program_entry(8, "10:00 PM", "Party & Dancing", "Open dance floor and celebration"),
        program_entry(9, "11:00 PM", "Thank You & Send-off", "Final thanks and farewell to guests"),
    ]
}

/// Aggregate of everything above (`/api/debut-data`)
pub fn debut_data() -> DebutData {
    DebutData {
        event: event_details(),
        traditions: traditions(),
        faq: faq_items(),
        transport: transport_tips(),
        program: program_timeline(),
    }
}
