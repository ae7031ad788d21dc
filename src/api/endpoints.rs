// Data Dragon locations for the per-version champion dataset
use std::path::{Path, PathBuf};

pub fn champion_json_url(cdn_url: &str, version: &str, locale: &str) -> String {
    format!("{}/{}/data/{}/champion.json", cdn_url, version, locale)
}

pub fn champion_json_path(data_dir: &Path, version: &str, locale: &str) -> PathBuf {
    data_dir
        .join(version)
        .join("data")
        .join(locale)
        .join("champion.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_cdn_url() {
        assert_eq!(
            champion_json_url("https://ddragon.leagueoflegends.com/cdn", "15.24.1", "en_US"),
            "https://ddragon.leagueoflegends.com/cdn/15.24.1/data/en_US/champion.json"
        );
    }

    #[test]
    fn builds_local_path() {
        let path = champion_json_path(Path::new("/srv/dd"), "14.25.1", "fr_FR");
        assert_eq!(path, PathBuf::from("/srv/dd/14.25.1/data/fr_FR/champion.json"));
    }
}
