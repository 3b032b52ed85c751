//! Curated package catalog
//!
//! The static list seeds the explore view. Live search results can be merged in
//! under [`SEARCH_RESULTS_CATEGORY`]; identifiers are never duplicated.

use crate::core::types::PackageRecord;
use crate::error::{PkgdeckError, Result};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Category that live search results are injected under.
pub const SEARCH_RESULTS_CATEGORY: &str = "Search Results";

// (Name, Id, Category)
const BUILTIN: &[(&str, &str, &str)] = &[
    ("Google Chrome", "Google.Chrome", "Browsers"),
    ("Mozilla Firefox", "Mozilla.Firefox", "Browsers"),
    ("Microsoft Edge", "Microsoft.Edge", "Browsers"),
    ("Brave", "Brave.Brave", "Browsers"),
    ("Opera", "Opera.Opera", "Browsers"),
    ("WhatsApp Desktop", "WhatsApp.WhatsApp", "Messaging"),
    ("Telegram Desktop", "Telegram.TelegramDesktop", "Messaging"),
    ("Discord", "Discord.Discord", "Messaging"),
    ("Zoom", "Zoom.Zoom", "Messaging"),
    ("Skype", "Microsoft.Skype", "Messaging"),
    ("Slack", "SlackTechnologies.Slack", "Messaging"),
    ("VLC Media Player", "VideoLAN.VLC", "Multimedia"),
    ("Spotify", "Spotify.Spotify", "Multimedia"),
    ("OBS Studio", "OBSProject.OBSStudio", "Multimedia"),
    ("GIMP", "GIMP.GIMP", "Multimedia"),
    ("Paint.NET", "dotPDN.Paint.NET", "Multimedia"),
    ("Audacity", "Audacity.Audacity", "Multimedia"),
    ("PotPlayer", "DAUM.PotPlayer", "Multimedia"),
    ("foobar2000", "foobar2000.foobar2000", "Multimedia"),
    ("Krita", "Krita.Krita", "Design"),
    ("Inkscape", "Inkscape.Inkscape", "Design"),
    ("Blender", "BlenderFoundation.Blender", "Design"),
    ("Aseprite", "Aseprite.Aseprite", "Design"),
    ("Visual Studio Code", "Microsoft.VisualStudioCode", "Development"),
    ("Git", "Git.Git", "Development"),
    ("Node.js LTS", "OpenJS.NodeJS.LTS", "Development"),
    ("Python 3", "Python.Python.3", "Development"),
    ("Java", "Oracle.JavaRuntimeEnvironment", "Development"),
    ("Docker Desktop", "Docker.DockerDesktop", "Development"),
    ("Postman", "Postman.Postman", "Development"),
    ("IntelliJ IDEA Community", "JetBrains.IntelliJIDEA.Community", "Development"),
    ("PyCharm Community", "JetBrains.PyCharm.Community", "Development"),
    ("Anaconda", "Anaconda.Anaconda", "AI/ML"),
    ("Miniconda", "Miniconda.Miniconda3", "AI/ML"),
    ("Power BI Desktop", "Microsoft.PowerBIDesktop", "AI/ML"),
    ("7-Zip", "7zip.7zip", "Utilities"),
    ("WinRAR", "RARLab.WinRAR", "Utilities"),
    ("Notepad++", "Notepad++.Notepad++", "Utilities"),
    ("Everything Search", "Voidtools.Everything", "Utilities"),
    ("CCleaner", "Piriform.CCleaner", "Utilities"),
    ("ShareX", "ShareX.ShareX", "Utilities"),
    ("PowerToys", "Microsoft.PowerToys", "Utilities"),
    ("LibreOffice", "TheDocumentFoundation.LibreOffice", "Office"),
    ("OnlyOffice Desktop Editors", "Ascensio.OnlyOffice", "Office"),
    ("Microsoft To Do", "Microsoft.Todos", "Office"),
    ("Evernote", "Evernote.Evernote", "Office"),
    ("Google Drive", "Google.Drive", "Office"),
    ("Dropbox", "Dropbox.Dropbox", "Office"),
    ("Steam", "Valve.Steam", "Gaming"),
    ("Epic Games Launcher", "EpicGames.EpicGamesLauncher", "Gaming"),
    ("Origin", "ElectronicArts.Origin", "Gaming"),
    ("Battle.net", "Blizzard.BattleNet", "Gaming"),
    ("GeForce Experience", "NVIDIA.GeForceExperience", "Gaming"),
    ("MSI Afterburner", "MSI.Afterburner", "Gaming"),
    ("Razer Synapse", "Razer.RazerSynapse", "Gaming"),
    ("CPU-Z", "CPUID.CPU-Z", "PC Test"),
    ("HWMonitor", "CPUID.HWMonitor", "PC Test"),
    ("CrystalDiskInfo", "CrystalDewWorld.CrystalDiskInfo", "PC Test"),
    ("GPU-Z", "TechPowerUp.GPU-Z", "PC Test"),
];

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<PackageRecord>,
}

impl Catalog {
    pub fn new(entries: Vec<PackageRecord>) -> Self {
        let mut catalog = Self::default();
        catalog.extend_unique(entries);
        catalog
    }

    /// The curated list shipped with the binary.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|(name, id, category)| PackageRecord::new(name, id, category))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[PackageRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.iter().any(|e| e.identifier == identifier)
    }

    /// Append records whose identifier is not already present.
    /// Returns how many were added.
    pub fn extend_unique<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = PackageRecord>,
    {
        let mut seen: HashSet<String> =
            self.entries.iter().map(|e| e.identifier.clone()).collect();
        let before = self.entries.len();

        for record in records {
            if seen.insert(record.identifier.clone()) {
                self.entries.push(record);
            }
        }

        self.entries.len() - before
    }

    /// Merge live search results under the "Search Results" category.
    pub fn inject_search_results(&mut self, results: Vec<PackageRecord>) -> usize {
        self.extend_unique(results.into_iter().map(|r| PackageRecord {
            category: SEARCH_RESULTS_CATEGORY.to_string(),
            ..r
        }))
    }

    /// Sorted, de-duplicated category names.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.entries.iter().map(|e| e.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Entries grouped by category, categories in sorted order, entries in catalog order.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&PackageRecord>> {
        let mut groups: BTreeMap<&str, Vec<&PackageRecord>> = BTreeMap::new();
        for entry in &self.entries {
            groups.entry(entry.category.as_str()).or_default().push(entry);
        }
        groups
    }

    /// Case-insensitive filter on name or identifier.
    pub fn filter(&self, needle: &str) -> Vec<&PackageRecord> {
        self.entries.iter().filter(|e| e.matches(needle)).collect()
    }
}

/// Load a user catalog: a JSON array of `{"Name", "Id", "Category"}` objects.
pub fn load_catalog_file(path: &Path) -> Result<Vec<PackageRecord>> {
    let content = fs::read_to_string(path).map_err(|e| PkgdeckError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let records: Vec<PackageRecord> = serde_json::from_str(&content).map_err(|e| {
        PkgdeckError::ConfigError(format!("Invalid catalog file {}: {}", path.display(), e))
    })?;

    Ok(records)
}
