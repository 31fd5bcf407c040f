use std::io::Write;
use tempfile::NamedTempFile;

pub const POKEDEX_HEADER: &str =
    "Name,Type 1,Type 2,HP,Att,Def,Spa,Spd,Spe,BST,Generation,Legendary,Mega Evolution,BMI";

/// Ten entries: Water 5, Fire 3, Grass 2; three legendary, two mega
pub const POKEDEX_ROWS: &[&str] = &[
    "Squirtle,Water,,44,48,65,50,64,43,314,1,False,0,19.4",
    "Wartortle,Water,,59,63,80,65,80,58,405,1,False,0,22.5",
    "Blastoise,Water,,79,83,100,85,105,78,530,1,False,1,33.5",
    "Kyogre,Water,,100,100,90,150,140,90,670,3,True,0,17.0",
    "Psyduck,Water,,50,52,48,65,50,55,320,1,False,0,19.6",
    "Charmander,Fire,,39,52,43,60,50,65,309,1,False,0,23.1",
    "Charizard,Fire,Flying,78,84,78,109,85,100,534,1,False,1,31.0",
    "Moltres,Fire,Flying,90,100,90,125,85,90,580,1,True,0,15.5",
    "Bulbasaur,Grass,Poison,45,49,49,65,65,45,318,1,False,0,14.6",
    "Celebi,Grass,Psychic,100,100,100,100,100,100,600,2,True,0,12.3",
];

pub fn write_csv(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp csv");
    writeln!(file, "{}", header).expect("write header");
    for row in rows {
        writeln!(file, "{}", row).expect("write row");
    }
    file.flush().expect("flush csv");
    file
}

pub fn pokedex_csv() -> NamedTempFile {
    write_csv(POKEDEX_HEADER, POKEDEX_ROWS)
}
