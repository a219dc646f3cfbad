use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::game::{GameDetails, PlayerRange, PlaytimeRange, SearchResult};

/// Curated game entry; figures are approximate BoardGameGeek values (circa 2025)
#[derive(Debug, Clone, PartialEq)]
pub struct StaticGameEntry {
    pub id: u64,
    /// Polish display name
    pub name: &'static str,
    pub original_name: &'static str,
    pub year_published: u16,
    pub rating: f64,
    /// BGG weight (1-5)
    pub complexity: f64,
    pub min_players: u32,
    pub max_players: u32,
    pub best_players: Option<u32>,
    pub min_playtime: u32,
    pub max_playtime: u32,
    /// Short Polish summary
    pub description: &'static str,
}

impl StaticGameEntry {
    /// The static set has no separate bayes data, so the bayes rating is the plain rating
    pub fn to_details(&self) -> GameDetails {
        GameDetails {
            id: self.id,
            name_pl: self.name.to_string(),
            name_original: self.original_name.to_string(),
            rating: self.rating,
            bayes_rating: self.rating,
            complexity: self.complexity,
            players: PlayerRange::new(self.min_players, self.max_players, self.best_players),
            playtime: PlaytimeRange::new(self.min_playtime, self.max_playtime),
            summary_pl: self.description.to_string(),
        }
    }

    pub fn to_search_result(&self) -> SearchResult {
        SearchResult {
            id: self.id,
            name_pl: self.name.to_string(),
            name_original: self.original_name.to_string(),
            year_published: self.year_published,
            rating: self.rating,
            complexity: self.complexity,
            players: PlayerRange::new(self.min_players, self.max_players, self.best_players),
            playtime: PlaytimeRange::new(self.min_playtime, self.max_playtime),
        }
    }
}

pub static STATIC_GAMES: &[StaticGameEntry] = &[
    StaticGameEntry {
        id: 174430,
        name: "Gloomhaven",
        original_name: "Gloomhaven",
        year_published: 2017,
        rating: 8.55,
        complexity: 3.91,
        min_players: 1,
        max_players: 4,
        best_players: Some(3),
        min_playtime: 60,
        max_playtime: 120,
        description: "Ciężka, kooperacyjna kampania fantasy z legacy i taktyczną walką na heksach. \
            Gracze budują talię kart postaci, wykonują scenariusze w otwartym świecie, \
            odblokowują nowe lokacje i bohaterów, a decyzje fabularne zmieniają mapę i dalszy przebieg kampanii.",
    },
    StaticGameEntry {
        id: 266192,
        name: "Na Skrzydłach",
        original_name: "Wingspan",
        year_published: 2019,
        rating: 8.01,
        complexity: 2.48,
        min_players: 1,
        max_players: 5,
        best_players: Some(3),
        min_playtime: 40,
        max_playtime: 70,
        description: "Łagodna, silniczkowa gra o ptakach – rozbudowujesz własny rezerwat, zagrywając karty ptaków \
            do trzech siedlisk. Każda akcja uruchamia łańcuch efektów kart, generując jedzenie, jajka i punkty. \
            Bardzo klimatyczna, z pięknymi ilustracjami i poczuciem spokojnego „engine buildingu”.",
    },
    StaticGameEntry {
        id: 13,
        name: "Catan",
        original_name: "Catan",
        year_published: 1995,
        rating: 7.09,
        complexity: 2.29,
        min_players: 3,
        max_players: 4,
        best_players: Some(4),
        min_playtime: 60,
        max_playtime: 120,
        description: "Klasyk gier euro – budujesz osady i miasta na wyspie, zbierasz surowce z rzutów kością \
            i wymieniasz je z innymi graczami. Kluczowe jest dobre ustawienie na planszy, negocjacje handlowe \
            oraz wyścig o drogę najdłuższą i największą armię.",
    },
    StaticGameEntry {
        id: 9209,
        name: "Wsiąść do Pociągu",
        original_name: "Ticket to Ride",
        year_published: 2004,
        rating: 7.39,
        complexity: 1.82,
        min_players: 2,
        max_players: 5,
        best_players: Some(4),
        min_playtime: 30,
        max_playtime: 60,
        description: "Lekka, rodzinna gra o budowaniu połączeń kolejowych. W swojej turze dobierasz karty wagonów \
            lub zagrywasz je, by zająć odcinki tras między miastami. Punkty zdobywasz za zrealizowane bilety, \
            długie ciągi tras i blokowanie przeciwników.",
    },
    StaticGameEntry {
        id: 230802,
        name: "Azul",
        original_name: "Azul",
        year_published: 2017,
        rating: 7.72,
        complexity: 1.77,
        min_players: 2,
        max_players: 4,
        best_players: Some(2),
        min_playtime: 30,
        max_playtime: 45,
        description: "Abstrakcyjna gra o układaniu kafelków na ścianie pałacu w Évorze. Gracze wybierają płytki z „fabryk”, \
            a potem układają je w rzędach, by zdobywać punkty za wzory, kolumny i rzędy. \
            Proste zasady, szybka rozgrywka, ale dużo przestrzeni na sprytne podkradanie kafelków innym.",
    },
    StaticGameEntry {
        id: 68448,
        name: "7 Cudów Świata",
        original_name: "7 Wonders",
        year_published: 2010,
        rating: 7.67,
        complexity: 2.32,
        min_players: 2,
        max_players: 7,
        best_players: Some(3),
        min_playtime: 30,
        max_playtime: 40,
        description: "Gra z równoczesnym dobieraniem kart – rozwijasz swoje antyczne miasto, budujesz budynki, armię \
            i sam tytułowy cud świata. Rozgrywka trwa trzy epoki, a karty dają surowce, punkty nauki, wojska \
            lub premie na koniec gry. Skalowanie do dużej liczby graczy bez wydłużania czasu partii.",
    },
];

static GAMES_BY_ID: Lazy<HashMap<u64, &'static StaticGameEntry>> =
    Lazy::new(|| STATIC_GAMES.iter().map(|game| (game.id, game)).collect());

/// Exact identifier match in the static set
pub fn find_static_game(id: u64) -> Option<&'static StaticGameEntry> {
    GAMES_BY_ID.get(&id).copied()
}
